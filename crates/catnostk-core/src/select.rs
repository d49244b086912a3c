//! Record selection: window filtering and date ordering.

use crate::record::Record;
use crate::window::DateWindow;

/// Keep the records whose `date` falls inside `window`, both ends included.
///
/// Records whose `date` is not a base-10 integer are skipped without error.
/// Survivors keep their input order; `records` is left untouched.
pub fn filter_by_window(records: &[Record], window: DateWindow) -> Vec<Record> {
    records
        .iter()
        .filter(|record| match record.timestamp() {
            Some(ts) => window.contains(ts),
            None => {
                tracing::trace!(
                    id = %record.id,
                    date = %record.date,
                    "skipping record with unparseable date"
                );
                false
            }
        })
        .cloned()
        .collect()
}

/// Order records by `date`, newest first.
///
/// Dates are compared as strings, byte by byte, which matches numeric order
/// only while every timestamp has the same number of digits. Ties keep no
/// particular order.
pub fn sort_by_date_desc(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_unstable_by(|a, b| b.date.cmp(&a.date));
    records
}
