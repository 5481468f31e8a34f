//! Due-date risk classification
//!
//! Classifies a single compliance date against fixed day breakpoints, and
//! folds a vehicle's date fields into one worst-risk-wins tier.

use chrono::NaiveDate;
use fleetgate_core::calendar::days_until;
use fleetgate_core::model::{ComplianceDateRecord, RiskTier};

/// Upper bound of the "due soon" band, in days until due.
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Upper bound of the "upcoming" band, in days until due.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

/// Classify a due date against the fixed breakpoints.
///
/// A missing date is always Green. Otherwise: overdue is High, due within
/// 7 days is Medium, due within 8 to 30 days is Low, anything further out
/// is Green.
///
/// `rule_interval_days` is accepted for forward compatibility with
/// interval-driven rules (the download tracker carries its own cadence);
/// every vehicle date field shares the breakpoints above regardless of it.
pub fn classify(
    due_date: Option<NaiveDate>,
    _rule_interval_days: u32,
    today: NaiveDate,
) -> RiskTier {
    let Some(due) = due_date else {
        return RiskTier::Green;
    };

    let days = days_until(due, today);
    if days < 0 {
        RiskTier::High
    } else if days <= DUE_SOON_WINDOW_DAYS {
        RiskTier::Medium
    } else if days <= UPCOMING_WINDOW_DAYS {
        RiskTier::Low
    } else {
        RiskTier::Green
    }
}

/// Worst risk across all of a vehicle's date fields.
///
/// Used for list and sort views; it does not gate any hard business rule.
pub fn vehicle_risk(dates: &[ComplianceDateRecord], today: NaiveDate) -> RiskTier {
    dates.iter().fold(RiskTier::Green, |acc, record| {
        // interval is unused by the date classifier
        acc.worst(classify(record.due_date, 0, today))
    })
}

/// Count vehicles whose worst date risk is overdue.
///
/// Feeds the fleet score aggregator's overdue-vehicle deduction.
pub fn count_overdue(vehicles: &[Vec<ComplianceDateRecord>], today: NaiveDate) -> u32 {
    vehicles
        .iter()
        .filter(|dates| vehicle_risk(dates, today) == RiskTier::High)
        .count() as u32
}
