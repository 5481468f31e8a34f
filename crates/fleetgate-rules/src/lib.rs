//! Fleetgate Rules: the Regulatory Compliance Rule Engine
//!
//! Four independent, side-effect-free evaluators over caller-supplied
//! records. No evaluator depends on another at the type level; callers
//! compose them as needed (the score aggregator consumes overdue counts
//! derived from the date classifier, for example).
//!
//! ```text
//! ShiftRecord ───────────────► hours ─────► {ViolationCode}
//! ComplianceDateRecord ──────► due_date ──► RiskTier
//! DownloadEvent history ─────► downloads ─► DownloadStatus
//! defect / overdue counts ───► score ─────► FleetScore
//! ```
//!
//! Every function is a pure computation over its arguments: "today" is
//! always an explicit parameter, never a clock read, so evaluations are
//! reproducible and safe to call from any number of threads.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use fleetgate_core::model::{ShiftRecord, ViolationCode};
//! use fleetgate_rules::hours;
//!
//! let shift = ShiftRecord::new(
//!     "drv-1",
//!     NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
//!     660, // driving minutes
//!     30,  // break minutes
//!     0,   // rest not recorded
//! );
//!
//! let violations = hours::evaluate_shift(&shift);
//! assert!(violations.contains(&ViolationCode::ExtensionLimitExceeded));
//! assert!(violations.contains(&ViolationCode::BreakNotTaken));
//! ```

pub mod downloads;
pub mod due_date;
pub mod hours;
pub mod score;

// Classification
pub use due_date::{classify, count_overdue, vehicle_risk};

// Drivers' hours
pub use hours::{evaluate_shift, evaluate_weekly, weekly_driving_total};

// Download cycles
pub use downloads::{status as download_status, DownloadLog, DownloadLogStats};

// Scoring
pub use score::{fleet_score, FleetScore, ScoreBand};

use fleetgate_core::model::ShiftRecord;

/// Quick check that a single shift carries no daily violations.
pub fn shift_is_compliant(shift: &ShiftRecord) -> bool {
    evaluate_shift(shift).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fleetgate_core::model::{DefectCounts, DownloadEvent, RiskTier, SubjectKind};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 16).unwrap()
    }

    #[test]
    fn test_shift_is_compliant() {
        let good = ShiftRecord::new("drv-1", today(), 480, 45, 660);
        assert!(shift_is_compliant(&good));

        let bad = ShiftRecord::new("drv-1", today(), 700, 0, 0);
        assert!(!shift_is_compliant(&bad));
    }

    #[test]
    fn test_composed_flow() {
        // a caller wiring the evaluators together the way a report screen does
        let mut log = DownloadLog::new();
        log.log(DownloadEvent::new(SubjectKind::DriverCard, today()));
        assert_eq!(log.status(SubjectKind::DriverCard, today()).tier, RiskTier::Green);

        let violations = evaluate_shift(&ShiftRecord::new("drv-1", today(), 560, 45, 660));
        let result = fleet_score(&DefectCounts::default(), 0, violations.len() as u32);
        assert_eq!(result.score, 97);
        assert_eq!(result.band, ScoreBand::Good);
    }
}
