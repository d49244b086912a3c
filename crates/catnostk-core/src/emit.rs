//! Output rendering.
//!
//! Two shapes are supported, selected by [`OutputFormat`]:
//!
//! - **Legacy** — a tab-indented block written by hand. Content must already
//!   be escaped (see [`crate::escape`]); ids, dates and pubkeys go out verbatim.
//! - **Json** — the same mapping built as a `serde_json` value and
//!   pretty-printed, so every field is escaped by the serializer.

use serde_json::{Map, Value};

use crate::error::{CatError, Result};
use crate::options::OutputFormat;
use crate::record::Record;

/// Render `records` in the requested format. The result ends with a newline.
pub fn emit(records: &[Record], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Legacy => Ok(emit_legacy(records)),
        OutputFormat::Json => emit_json(records),
    }
}

/// Render the legacy block:
///
/// ```text
/// {
///     "<id>" :{
///         "date" : "<date>",
///         "pubkey" : "<pubkey>",
///         "content" : "<content>"
///     },
/// }
/// ```
///
/// Indentation is one tab per level. Every entry but the last is followed by
/// a comma. No records gives `{` and `}` on consecutive lines.
pub fn emit_legacy(records: &[Record]) -> String {
    let mut out = String::from("{\n");
    let last = records.len().saturating_sub(1);
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "\t\"{}\" :{{\n\t\t\"date\" : \"{}\",\n\t\t\"pubkey\" : \"{}\",\n\t\t\"content\" : \"{}\"\n\t}}",
            record.id, record.date, record.pubkey, record.content
        ));
        out.push_str(if i < last { ",\n" } else { "\n" });
    }
    out.push_str("}\n");
    out
}

/// Render records as a pretty-printed JSON object keyed by id, in input order.
///
/// # Errors
///
/// Returns [`CatError::Encode`] if serialization fails.
pub fn emit_json(records: &[Record]) -> Result<String> {
    let mut map = Map::with_capacity(records.len());
    for record in records {
        let entry = serde_json::to_value(record).map_err(|e| CatError::Encode(e.to_string()))?;
        map.insert(record.id.clone(), entry);
    }
    let mut out = serde_json::to_string_pretty(&Value::Object(map))
        .map_err(|e| CatError::Encode(e.to_string()))?;
    out.push('\n');
    Ok(out)
}
