//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("DATE/{0}")]
    InvalidDate(String),

    #[error("KIND/{0}")]
    UnknownKind(String),
}
