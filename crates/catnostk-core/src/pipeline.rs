//! End-to-end pass: resolve → decode → filter → sort → emit.

use crate::emit::emit;
use crate::error::{CatError, Result};
use crate::options::CatOptions;
use crate::record::parse_records;
use crate::select::{filter_by_window, sort_by_date_desc};
use crate::window::{resolve_window, DateWindow};

/// Produce the output text for the records in `input` that fall inside `date_spec`.
///
/// The date spec is resolved before the input is decoded, so a bad spec is
/// reported even when the input is malformed too. Nothing is rendered unless
/// every step succeeds.
///
/// # Examples
///
/// ```
/// use catnostk_core::{run, CatOptions};
///
/// let input = r#"{"1":{"date":"1546300800","pubkey":"pk1","content":"hi"}}"#;
/// let out = run("2018", input, &CatOptions::default()).unwrap();
/// assert_eq!(out, "{\n}\n");
/// ```
pub fn run(date_spec: &str, input: &str, options: &CatOptions) -> Result<String> {
    let window = resolve_window(date_spec, options.timezone)?;
    run_in_window(window, input, options)
}

/// Same as [`run`] with the window already resolved.
pub fn run_in_window(
    window: DateWindow,
    input: &str,
    options: &CatOptions,
) -> Result<String> {
    let records = parse_records(input, options.format.escapes_on_ingest())?;
    let selected = sort_by_date_desc(filter_by_window(&records, window));
    tracing::info!(
        total = records.len(),
        selected = selected.len(),
        format = %options.format,
        "filtered records"
    );
    emit(&selected, options.format)
}
