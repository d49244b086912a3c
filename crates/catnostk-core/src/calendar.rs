//! Calendar arithmetic for month boundaries.

use chrono::{Datelike, Days, Months, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::error::{CatError, Result};

/// Last calendar day of `month` in `year`, zero-padded to two digits.
///
/// The first of the month is anchored at midnight in `tz`, moved forward one
/// calendar month and back one day, so leap years and 30/31-day months come
/// out of the calendar itself.
///
/// # Errors
///
/// Returns [`CatError::Calendar`] if `"{year}-{month}-01"` is not a valid,
/// zero-padded date.
///
/// # Examples
///
/// ```
/// use catnostk_core::calendar::last_day_of_month;
///
/// assert_eq!(last_day_of_month("2020", "02", chrono_tz::Asia::Tokyo).unwrap(), "29");
/// assert_eq!(last_day_of_month("2019", "02", chrono_tz::Asia::Tokyo).unwrap(), "28");
/// ```
pub fn last_day_of_month(year: &str, month: &str, tz: Tz) -> Result<String> {
    let composite = format!("{year}-{month}-01");
    let first = NaiveDate::parse_from_str(&composite, "%Y-%m-%d")
        .map_err(|e| CatError::Calendar(format!("'{}': {}", composite, e)))?;
    // chrono accepts " 7" and "7" for %m; only the padded form is a month here.
    if first.format("%Y-%m-%d").to_string() != composite {
        return Err(CatError::Calendar(format!("'{}' is not zero-padded", composite)));
    }

    let midnight = first
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| tz.from_local_datetime(&naive).single())
        .ok_or_else(|| {
            CatError::Calendar(format!("'{}' has no single midnight in {}", composite, tz.name()))
        })?;

    let last = midnight
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .ok_or_else(|| CatError::Calendar(format!("'{}' is out of range", composite)))?;

    Ok(format!("{:02}", last.day()))
}
