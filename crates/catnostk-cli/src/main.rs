//! catnostk — print the Nostr log records that fall inside a date range.
//!
//! ## Usage
//!
//! ```bash
//! # Records from July 2019, read from a file
//! catnostk -f notes.json5 -d 2019/07
//!
//! # Records from a single day, piped in
//! cat notes.json5 | catnostk -d 2019/07/15
//!
//! # Whole year as pretty-printed JSON, boundaries in UTC
//! catnostk -f notes.json5 -d 2019 --format json --timezone UTC
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use catnostk_core::{
    parse_timezone, read_source_file, read_with_timeout, resolve_window, run_in_window,
    CatOptions, OutputFormat, DEFAULT_DATE_SPEC, DEFAULT_STDIN_TIMEOUT,
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Print the Nostr log records that fall inside a date range
#[derive(Parser)]
#[command(name = "catnostk", version)]
#[command(about = "Print the Nostr log records that fall inside a date range")]
struct Cli {
    /// Source file (JSON5). Standard input is read when omitted
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Date range: YYYY, YYYY/MM or YYYY/MM/DD
    #[arg(short = 'd', long = "date", default_value = DEFAULT_DATE_SPEC)]
    date: String,

    /// IANA timezone the date range is interpreted in
    #[arg(long, default_value = "Asia/Tokyo")]
    timezone: String,

    /// Seconds to wait for standard input
    #[arg(long, default_value_t = DEFAULT_STDIN_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Legacy)]
    format: Format,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append logs to this file instead of standard error
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Tab-indented block with pre-escaped content
    Legacy,
    /// Pretty-printed JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Legacy => OutputFormat::Legacy,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn setup_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let builder = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
    );

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn read_input(file: Option<&Path>, timeout: Duration) -> Result<String> {
    match file {
        Some(path) => read_source_file(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            tracing::debug!(?timeout, "reading standard input");
            read_with_timeout(io::stdin(), timeout).context("Failed to read standard input")
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = CatOptions {
        timezone: parse_timezone(&cli.timezone)?,
        stdin_timeout: Duration::from_secs(cli.timeout_secs),
        format: cli.format.into(),
    };

    // Resolve first so a bad date spec never waits on input.
    let window = resolve_window(&cli.date, options.timezone)
        .with_context(|| format!("Bad date range '{}'", cli.date))?;

    // `-f ""` means standard input, as if the flag were absent.
    let file = cli.file.as_deref().filter(|p| !p.as_os_str().is_empty());
    let input = read_input(file, options.stdin_timeout)?;

    let output = run_in_window(window, &input, &options).context("Failed to process records")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write output")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.log_file.as_deref())?;

    run(&cli).inspect_err(|e| tracing::error!(error = %format!("{e:#}"), "catnostk failed"))
}
