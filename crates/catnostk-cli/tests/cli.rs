//! CLI integration tests: flags, input sources, output and exit status.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const ONE_RECORD: &str = r#"{"1":{"date":"1546300800","pubkey":"pk1","content":"hi"}}"#;

const ONE_RECORD_OUTPUT: &str =
    "{\n\t\"1\" :{\n\t\t\"date\" : \"1546300800\",\n\t\t\"pubkey\" : \"pk1\",\n\t\t\"content\" : \"hi\"\n\t}\n}\n";

fn catnostk() -> Command {
    let mut cmd = Command::cargo_bin("catnostk").expect("Failed to find catnostk binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_source(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("notes.json5");
    std::fs::write(&path, text).unwrap();
    path
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_year_containing_record() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, ONE_RECORD);

    catnostk()
        .arg("-f")
        .arg(&path)
        .args(["-d", "2019"])
        .assert()
        .success()
        .stdout(ONE_RECORD_OUTPUT);
}

#[test]
fn test_year_without_records_prints_empty_block() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, ONE_RECORD);

    catnostk()
        .arg("-f")
        .arg(&path)
        .args(["-d", "2018"])
        .assert()
        .success()
        .stdout("{\n}\n");
}

#[test]
fn test_default_date_is_first_of_january_2019() {
    catnostk()
        .write_stdin(ONE_RECORD)
        .assert()
        .success()
        .stdout(ONE_RECORD_OUTPUT);
}

#[test]
fn test_month_spec_with_dash_separator() {
    catnostk()
        .args(["-d", "2019-01"])
        .write_stdin(ONE_RECORD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"1\" :{"));
}

#[test]
fn test_newest_first_and_unparseable_dates_dropped() {
    let input = r#"{
        // relaxed JSON is accepted
        old: { date: "1546300800", pubkey: "pk", content: "first" },
        new: { date: "1561939200", pubkey: "pk", content: "second" },
        junk: { date: "tomorrow", pubkey: "pk", content: "never" },
    }"#;

    let output = catnostk()
        .args(["-d", "2019"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.find("\"new\"").unwrap() < stdout.find("\"old\"").unwrap());
    assert!(!stdout.contains("junk"));
    assert!(stdout.contains("\t},\n"));
}

#[test]
fn test_content_is_escaped_in_legacy_output() {
    catnostk()
        .args(["-d", "2019"])
        .write_stdin(r#"{"1":{"date":"1546300800","pubkey":"pk1","content":"see https://x.y"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""content" : "see https:\/\/x.y""#));
}

#[test]
fn test_json_format() {
    let output = catnostk()
        .args(["-d", "2019/01/01", "--format", "json"])
        .write_stdin(r#"{"1":{"date":"1546300800","pubkey":"pk1","content":"a \"b\""}}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["1"]["content"], "a \"b\"");
    assert_eq!(value["1"]["pubkey"], "pk1");
}

#[test]
fn test_timezone_flag_moves_boundaries() {
    // 2018-12-31T16:00:00Z is 2019 in Tokyo but 2018 in UTC
    let input = r#"{"edge":{"date":"1546272000","pubkey":"p","content":"c"}}"#;

    catnostk()
        .args(["-d", "2019", "--timezone", "UTC"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("{\n}\n");

    catnostk()
        .args(["-d", "2019"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"edge\""));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_invalid_spec_length_fails() {
    catnostk()
        .args(["-d", "20190"])
        .write_stdin(ONE_RECORD)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid date specification"));
}

#[test]
fn test_invalid_month_fails() {
    catnostk()
        .args(["-d", "2019/13"])
        .write_stdin(ONE_RECORD)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Calendar error"));
}

#[test]
fn test_malformed_input_fails() {
    catnostk()
        .args(["-d", "2019"])
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Decode error"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    catnostk()
        .arg("-f")
        .arg(dir.path().join("absent.json5"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_unknown_timezone_fails() {
    catnostk()
        .args(["--timezone", "Mars/Olympus"])
        .write_stdin(ONE_RECORD)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_file_receives_logs() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("catnostk.log");

    catnostk()
        .args(["-v", "-d", "2019"])
        .arg("--log-file")
        .arg(&log)
        .write_stdin(ONE_RECORD)
        .assert()
        .success()
        .stdout(ONE_RECORD_OUTPUT)
        .stderr("");

    let logged = std::fs::read_to_string(&log).unwrap();
    assert!(logged.contains("filtered records"), "log was: {logged}");
}
