//! Calendar and duration primitives
//!
//! All rule evaluation works on plain calendar dates with a caller-supplied
//! "today"; nothing in this module reads a clock.

use crate::error::ComplianceError;
use chrono::NaiveDate;

/// Signed whole days from `today` until `due`. Negative when `due` is past.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Signed whole days elapsed from `past` to `today`.
pub fn days_since(past: NaiveDate, today: NaiveDate) -> i64 {
    (today - past).num_days()
}

/// Whether `date` falls in the `window_days`-day window ending at
/// `reference` (inclusive). A 7-day window covers `reference` and the six
/// preceding days.
pub fn in_trailing_window(date: NaiveDate, reference: NaiveDate, window_days: i64) -> bool {
    let behind = days_since(date, reference);
    behind >= 0 && behind < window_days
}

/// Parse a strict ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// This is the fail-fast boundary for malformed dates; classifiers never
/// see an unparsed string.
pub fn parse_date(s: &str) -> Result<NaiveDate, ComplianceError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ComplianceError::InvalidDate(s.to_string()))
}
