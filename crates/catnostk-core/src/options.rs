//! Run configuration: boundary timezone, stdin deadline and output format.

use std::fmt;
use std::time::Duration;

use chrono_tz::Tz;

use crate::error::{CatError, Result};

/// Zone in which date-spec boundaries are interpreted (JST, UTC+9).
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Tokyo;

/// How long to wait for standard input before giving up.
pub const DEFAULT_STDIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Date spec used when the caller gives none.
pub const DEFAULT_DATE_SPEC: &str = "2019/01/01";

// ── Output format ───────────────────────────────────────────────────────────

/// Shape of the emitted text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Hand-formatted, tab-indented block that existing consumers parse.
    /// Content is escaped once during ingestion.
    #[default]
    Legacy,
    /// Pretty-printed JSON produced by `serde_json`, which does its own escaping.
    Json,
}

impl OutputFormat {
    /// Whether record content must go through [`crate::escape::escape_content`]
    /// at ingestion time.
    pub fn escapes_on_ingest(self) -> bool {
        matches!(self, OutputFormat::Legacy)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Legacy => f.write_str("legacy"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

// ── Options ─────────────────────────────────────────────────────────────────

/// Options for [`crate::pipeline::run`].
#[derive(Debug, Clone)]
pub struct CatOptions {
    /// Zone used to turn date-spec boundaries into Unix timestamps.
    pub timezone: Tz,
    /// Deadline for reading standard input.
    pub stdin_timeout: Duration,
    /// Output shape.
    pub format: OutputFormat,
}

impl Default for CatOptions {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            stdin_timeout: DEFAULT_STDIN_TIMEOUT,
            format: OutputFormat::default(),
        }
    }
}

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| CatError::InvalidTimezone(format!("'{}'", s)))
}
