//! Fleet compliance score aggregation
//!
//! Deduction-based score over open defects, overdue vehicles, and
//! drivers'-hours violations, plus the banding downstream reports are
//! calibrated against. The score is always recomputed from current
//! counts; it is never stored as a source of truth.

use fleetgate_core::model::DefectCounts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deduction per dangerous defect, on top of the open-defect deduction.
pub const DANGEROUS_DEFECT_PENALTY: i64 = 20;

/// Deduction per open defect of any severity.
pub const OPEN_DEFECT_PENALTY: i64 = 5;

/// Deduction per vehicle whose worst date risk is overdue.
pub const OVERDUE_VEHICLE_PENALTY: i64 = 15;

/// Deduction per recorded drivers'-hours violation.
pub const HOURS_VIOLATION_PENALTY: i64 = 3;

/// Compute the fleet compliance score in `[0, 100]`.
///
/// Dangerous defects are deducted twice: once through the
/// dangerous-specific penalty and again through the open-defect penalty.
/// The banding in [`ScoreBand::from_score`] is calibrated against this
/// exact formula; the two must change together or not at all.
pub fn score(
    defects: &DefectCounts,
    overdue_vehicle_count: u32,
    hours_violation_count: u32,
) -> u32 {
    let total = 100
        - i64::from(defects.dangerous) * DANGEROUS_DEFECT_PENALTY
        - i64::from(defects.open_total()) * OPEN_DEFECT_PENALTY
        - i64::from(overdue_vehicle_count) * OVERDUE_VEHICLE_PENALTY
        - i64::from(hours_violation_count) * HOURS_VIOLATION_PENALTY;

    total.clamp(0, 100) as u32
}

/// Risk band a fleet score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreBand {
    /// 80 to 100: routine monitoring
    Good,
    /// 60 to 79: needs attention
    Attention,
    /// Below 60: high risk, intervene
    HighRisk,
}

impl ScoreBand {
    /// Band for a score in `[0, 100]`
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => ScoreBand::Good,
            60..=79 => ScoreBand::Attention,
            _ => ScoreBand::HighRisk,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoreBand::Good => write!(f, "GOOD"),
            ScoreBand::Attention => write!(f, "ATTENTION"),
            ScoreBand::HighRisk => write!(f, "HIGH_RISK"),
        }
    }
}

/// Score plus its band, for API and report callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetScore {
    pub score: u32,
    pub band: ScoreBand,
}

/// Compute the score and its band in one call
pub fn fleet_score(
    defects: &DefectCounts,
    overdue_vehicle_count: u32,
    hours_violation_count: u32,
) -> FleetScore {
    let score = score(defects, overdue_vehicle_count, hours_violation_count);
    FleetScore {
        score,
        band: ScoreBand::from_score(score),
    }
}
