//! Fleetgate Core: Data Model, Calendar Primitives, and Error Model
//!
//! Shared value objects and date arithmetic consumed by every rule
//! evaluator. Everything here is owned by the caller's persistence layer;
//! the engine never mutates a record it is handed.

pub mod calendar;
pub mod error;
pub mod model;

pub use calendar::{days_since, days_until, in_trailing_window, parse_date};
pub use error::ComplianceError;
pub use model::{
    ComplianceDateRecord, DateFieldKind, DefectCounts, DownloadEvent, DownloadStatus, RiskTier,
    ShiftRecord, SubjectKind, ViolationCode,
};

/// Version of the Fleetgate engine
pub const FLEETGATE_VERSION: &str = "1.0.0";
