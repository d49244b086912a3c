//! Date-spec → inclusive Unix-time window.
//!
//! A date spec is a partial calendar date whose length picks the granularity:
//!
//! | spec         | window                                        |
//! |--------------|-----------------------------------------------|
//! | `YYYY`       | `YYYY/01/01 00:00:00` – `YYYY/12/31 23:59:59` |
//! | `YYYY/MM`    | `YYYY/MM/01 00:00:00` – last day `23:59:59`   |
//! | `YYYY/MM/DD` | `YYYY/MM/DD 00:00:00` – `YYYY/MM/DD 23:59:59` |
//!
//! Boundaries are wall-clock times in the zone the caller passes in; they are
//! never taken from the host locale.
//!
//! The `YYYY/MM` form is read positionally: the first four characters are the
//! year and the last two the month, whatever sits between them. `2019-07`
//! therefore resolves exactly like `2019/07`. Existing callers depend on this.

use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::calendar::last_day_of_month;
use crate::error::{CatError, Result};

/// Layout every boundary string is parsed with.
const BOUNDARY_LAYOUT: &str = "%Y/%m/%d %H:%M:%S";
const START_OF_DAY: &str = "00:00:00";
const END_OF_DAY: &str = "23:59:59";

/// Inclusive `[start, end]` range of Unix timestamps (seconds).
///
/// `start <= end` is expected but not checked; an inverted window simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: i64,
    pub end: i64,
}

impl DateWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Whether `ts` lies inside the window, both ends included.
    pub fn contains(&self, ts: i64) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// Resolve a date spec into an inclusive window of Unix timestamps.
///
/// # Errors
///
/// Returns [`CatError::InvalidSpec`] when `spec` is not 4, 7 or 10 bytes long,
/// and [`CatError::Calendar`] when a boundary is not a real date/time in `tz`.
///
/// # Examples
///
/// ```
/// use catnostk_core::window::resolve_window;
///
/// let w = resolve_window("2019", chrono_tz::UTC).unwrap();
/// assert_eq!(w.start, 1_546_300_800);
/// assert_eq!(w.end, 1_577_836_799);
/// ```
pub fn resolve_window(spec: &str, tz: Tz) -> Result<DateWindow> {
    let (start, end) = match spec.len() {
        4 => (
            format!("{spec}/01/01 {START_OF_DAY}"),
            format!("{spec}/12/31 {END_OF_DAY}"),
        ),
        7 => {
            let year = first_four(spec)?;
            let month = last_two(spec);
            let day = last_day_of_month(year, &month, tz)?;
            (
                format!("{year}/{month}/01 {START_OF_DAY}"),
                format!("{year}/{month}/{day} {END_OF_DAY}"),
            )
        }
        10 => (
            format!("{spec} {START_OF_DAY}"),
            format!("{spec} {END_OF_DAY}"),
        ),
        n => {
            return Err(CatError::InvalidSpec(format!(
                "'{}' has length {}, expected YYYY, YYYY/MM or YYYY/MM/DD",
                spec, n
            )));
        }
    };

    let window = DateWindow::new(boundary_timestamp(&start, tz)?, boundary_timestamp(&end, tz)?);
    tracing::debug!(
        spec,
        tz = tz.name(),
        start = window.start,
        end = window.end,
        "resolved date window"
    );
    Ok(window)
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Parse a `YYYY/MM/DD HH:MM:SS` wall-clock string in `tz` into Unix seconds.
///
/// The string must be exactly what the layout formats back to. chrono's
/// parser skips padding spaces and takes single-digit fields, which would
/// let `2019/7/15 ` or `  19` through.
fn boundary_timestamp(s: &str, tz: Tz) -> Result<i64> {
    let naive = NaiveDateTime::parse_from_str(s, BOUNDARY_LAYOUT)
        .map_err(|e| CatError::Calendar(format!("'{}': {}", s, e)))?;
    if naive.format(BOUNDARY_LAYOUT).to_string() != s {
        return Err(CatError::Calendar(format!(
            "'{}' is not zero-padded {}",
            s, BOUNDARY_LAYOUT
        )));
    }
    tz.from_local_datetime(&naive)
        .single()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| {
            CatError::Calendar(format!("'{}' is not a single instant in {}", s, tz.name()))
        })
}

/// First four bytes of the spec (the year).
fn first_four(s: &str) -> Result<&str> {
    s.get(..4)
        .ok_or_else(|| CatError::Calendar(format!("'{}': year is not four characters", s)))
}

/// Last two characters of the spec (the month).
fn last_two(s: &str) -> String {
    let mut tail: Vec<char> = s.chars().rev().take(2).collect();
    tail.reverse();
    tail.into_iter().collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
