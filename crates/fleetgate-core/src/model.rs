//! Data Model: shift records, compliance dates, download events, tiers
use crate::error::ComplianceError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One driver's duty period on one date.
///
/// Minutes fields are unsigned, so the non-negative invariant is enforced
/// at the serde boundary. Records are immutable in the engine's view:
/// recomputing violations means a fresh evaluation, never a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// Opaque driver identifier, owned by the caller
    pub driver_ref: String,

    /// Calendar date of the duty period (no time-of-day semantics)
    pub shift_date: NaiveDate,

    /// Minutes spent driving
    pub driving_minutes: u32,

    /// Minutes of break taken during the shift
    pub break_minutes: u32,

    /// Minutes of daily rest recorded after the shift; 0 means "not recorded"
    pub rest_minutes: u32,

    /// Free-text note, passthrough only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ShiftRecord {
    /// Create a new shift record
    pub fn new(
        driver_ref: impl Into<String>,
        shift_date: NaiveDate,
        driving_minutes: u32,
        break_minutes: u32,
        rest_minutes: u32,
    ) -> Self {
        Self {
            driver_ref: driver_ref.into(),
            shift_date,
            driving_minutes,
            break_minutes,
            rest_minutes,
            notes: None,
        }
    }

    /// Attach a free-text note
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Which regulatory/service date a [`ComplianceDateRecord`] carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateFieldKind {
    Mot,
    Pmi,
    Insurance,
    Tacho,
    Service,
}

impl FromStr for DateFieldKind {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MOT" => Ok(DateFieldKind::Mot),
            "PMI" => Ok(DateFieldKind::Pmi),
            "INSURANCE" => Ok(DateFieldKind::Insurance),
            "TACHO" => Ok(DateFieldKind::Tacho),
            "SERVICE" => Ok(DateFieldKind::Service),
            other => Err(ComplianceError::UnknownKind(other.to_string())),
        }
    }
}

/// A single regulatory/service date attached to a vehicle.
///
/// A missing due date is valid and classifies as the lowest risk tier;
/// the tracker never raises an alarm for a date that was never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDateRecord {
    pub field_kind: DateFieldKind,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl ComplianceDateRecord {
    pub fn new(field_kind: DateFieldKind, due_date: Option<NaiveDate>) -> Self {
        Self { field_kind, due_date }
    }
}

/// What a tachograph download was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubjectKind {
    DriverCard,
    VehicleUnit,
}

impl SubjectKind {
    /// Statutory download cadence in days: 28 for driver cards, 90 for
    /// vehicle units.
    pub fn rule_interval_days(&self) -> i64 {
        match self {
            SubjectKind::DriverCard => 28,
            SubjectKind::VehicleUnit => 90,
        }
    }
}

impl FromStr for SubjectKind {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRIVER_CARD" => Ok(SubjectKind::DriverCard),
            "VEHICLE_UNIT" => Ok(SubjectKind::VehicleUnit),
            other => Err(ComplianceError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubjectKind::DriverCard => write!(f, "DRIVER_CARD"),
            SubjectKind::VehicleUnit => write!(f, "VEHICLE_UNIT"),
        }
    }
}

/// One logged tachograph download.
///
/// Only the most recent download date per subject drives compliance;
/// older events remain as audit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadEvent {
    pub subject_kind: SubjectKind,

    pub download_date: NaiveDate,

    /// Download software used, passthrough
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Who logged the event, passthrough
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_by: Option<String>,
}

impl DownloadEvent {
    pub fn new(subject_kind: SubjectKind, download_date: NaiveDate) -> Self {
        Self {
            subject_kind,
            download_date,
            software: None,
            notes: None,
            logged_by: None,
        }
    }

    pub fn with_software(mut self, software: impl Into<String>) -> Self {
        self.software = Some(software.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn logged_by(mut self, logged_by: impl Into<String>) -> Self {
        self.logged_by = Some(logged_by.into());
        self
    }
}

/// How close or overdue a date-bound obligation is.
///
/// Total order, worst last; aggregation across a vehicle's date fields
/// takes the maximum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    /// Nothing due inside the alerting horizon
    #[default]
    Green = 0,
    /// Due within 8 to 30 days
    Low = 1,
    /// Due within 7 days
    Medium = 2,
    /// Overdue, or never performed at all
    High = 3,
}

impl RiskTier {
    /// Combine two tiers, keeping the worse one
    pub fn worst(self, other: RiskTier) -> RiskTier {
        self.max(other)
    }

    /// Whether this tier should surface on an exceptions report
    pub fn is_actionable(&self) -> bool {
        matches!(self, RiskTier::Medium | RiskTier::High)
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RiskTier::Green => write!(f, "GREEN"),
            RiskTier::Low => write!(f, "LOW"),
            RiskTier::Medium => write!(f, "MEDIUM"),
            RiskTier::High => write!(f, "HIGH"),
        }
    }
}

/// A breach of the drivers'-hours rules, attached to a single shift
/// (or, for the weekly code, a trailing seven-day window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    DailyDrivingExceeded,
    ExtensionLimitExceeded,
    BreakNotTaken,
    DailyRestInsufficient,
    WeeklyHoursExceeded,
}

impl ViolationCode {
    /// Statutory meaning of the code
    pub fn description(&self) -> &'static str {
        match self {
            ViolationCode::DailyDrivingExceeded => "daily driving over the 9-hour limit",
            ViolationCode::ExtensionLimitExceeded => {
                "daily driving over the 10-hour extension ceiling"
            }
            ViolationCode::BreakNotTaken => "no 45-minute break after 4.5 hours of driving",
            ViolationCode::DailyRestInsufficient => "daily rest below the 11-hour minimum",
            ViolationCode::WeeklyHoursExceeded => "weekly driving over the 56-hour limit",
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViolationCode::DailyDrivingExceeded => write!(f, "DAILY_DRIVING_EXCEEDED"),
            ViolationCode::ExtensionLimitExceeded => write!(f, "EXTENSION_LIMIT_EXCEEDED"),
            ViolationCode::BreakNotTaken => write!(f, "BREAK_NOT_TAKEN"),
            ViolationCode::DailyRestInsufficient => write!(f, "DAILY_REST_INSUFFICIENT"),
            ViolationCode::WeeklyHoursExceeded => write!(f, "WEEKLY_HOURS_EXCEEDED"),
        }
    }
}

/// Result of a download-cycle evaluation for one subject.
///
/// `last_download` and `days_until_due` are both absent when the subject
/// has never been downloaded; that state is tier High, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadStatus {
    pub tier: RiskTier,
    pub last_download: Option<NaiveDate>,
    pub days_until_due: Option<i64>,
}

/// Open defect counts by severity, input to the score aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefectCounts {
    pub dangerous: u32,
    pub major: u32,
    pub minor: u32,
}

impl DefectCounts {
    pub fn new(dangerous: u32, major: u32, minor: u32) -> Self {
        Self { dangerous, major, minor }
    }

    /// Total open defects across all severities
    pub fn open_total(&self) -> u32 {
        self.dangerous + self.major + self.minor
    }
}
