//! # catnostk-core
//!
//! Date-window filtering for exported Nostr log records.
//!
//! Takes a JSON5 mapping of record id → `{ date, pubkey, content }`, keeps
//! the records whose Unix-timestamp `date` falls inside a window derived from
//! a partial date (`"2019"`, `"2019/07"`, `"2019/07/15"`), orders them newest
//! first and renders them as text. Every function is pure except [`input`],
//! which does the reading.
//!
//! ## Modules
//!
//! - [`window`] — date spec → inclusive Unix-time window in a fixed zone
//! - [`calendar`] — last day of a month
//! - [`escape`] — content escaping for the legacy output
//! - [`record`] — record type and JSON5 decoding
//! - [`select`] — window filtering and date ordering
//! - [`emit`] — legacy and JSON rendering
//! - [`input`] — file reads and deadline-bounded stream reads
//! - [`options`] — run configuration
//! - [`pipeline`] — the whole pass in one call
//! - [`error`] — error types

pub mod calendar;
pub mod emit;
pub mod error;
pub mod escape;
pub mod input;
pub mod options;
pub mod pipeline;
pub mod record;
pub mod select;
pub mod window;

pub use calendar::last_day_of_month;
pub use emit::{emit, emit_json, emit_legacy};
pub use error::CatError;
pub use escape::escape_content;
pub use input::{read_source_file, read_with_timeout};
pub use options::{
    parse_timezone, CatOptions, OutputFormat, DEFAULT_DATE_SPEC, DEFAULT_STDIN_TIMEOUT,
    DEFAULT_TIMEZONE,
};
pub use pipeline::{run, run_in_window};
pub use record::{parse_records, Record};
pub use select::{filter_by_window, sort_by_date_desc};
pub use window::{resolve_window, DateWindow};
