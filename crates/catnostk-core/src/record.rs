//! Log records and their relaxed-JSON source format.
//!
//! The source is a JSON5 object mapping record ids to entries:
//!
//! ```text
//! {
//!   "note1": { date: "1546300800", pubkey: "pk1", content: "hi" },
//! }
//! ```
//!
//! Fields are extracted best-effort: a missing field becomes the empty
//! string and unknown fields are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatError, Result};
use crate::escape::escape_content;

/// One log record. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Key of the entry in the source mapping.
    #[serde(skip_serializing)]
    pub id: String,
    /// Decimal Unix timestamp, kept as the source text.
    pub date: String,
    /// Publisher key.
    pub pubkey: String,
    /// Content text, escaped or raw depending on how it was ingested.
    pub content: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        pubkey: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            pubkey: pubkey.into(),
            content: content.into(),
        }
    }

    /// The `date` field as Unix seconds, or `None` if it is not a base-10 integer.
    pub fn timestamp(&self) -> Option<i64> {
        self.date.parse::<i64>().ok()
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    date: String,
    #[serde(default)]
    pubkey: String,
    #[serde(default)]
    content: String,
}

/// Decode a JSON5 id → entry mapping into records.
///
/// When `escape` is set every record's content is passed through
/// [`escape_content`] on the way in. Records come out ordered by id; callers
/// must not rely on that and sort explicitly.
///
/// # Errors
///
/// Returns [`CatError::Decode`] if `text` is not a JSON5 object of entries
/// whose fields are strings.
pub fn parse_records(text: &str, escape: bool) -> Result<Vec<Record>> {
    let entries: BTreeMap<String, RawEntry> =
        json5::from_str(text).map_err(|e| CatError::Decode(e.to_string()))?;

    let records: Vec<Record> = entries
        .into_iter()
        .map(|(id, entry)| Record {
            id,
            date: entry.date,
            pubkey: entry.pubkey,
            content: if escape {
                escape_content(&entry.content)
            } else {
                entry.content
            },
        })
        .collect();

    tracing::debug!(count = records.len(), escape, "decoded records");
    Ok(records)
}
