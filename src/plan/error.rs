//! Plan loading and resolution errors.

use thiserror::Error;

/// Structural failures that abort a plan load.
///
/// Pace problems are not represented here; they degrade to "unavailable"
/// values instead of failing the load.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The document is not valid JSON or has the wrong shape
    #[error("Plan data is malformed: {0}")]
    InvalidJson(String),

    /// The data source replied with an error message instead of a plan
    #[error("Data error from plan source: {0}")]
    SourceError(String),

    /// A required top-level section is absent
    #[error("Plan data is incomplete: missing `{0}`")]
    MissingField(String),

    /// The plan file could not be read
    #[error("Failed to read plan file: {0}")]
    Io(String),

    /// `planStartDate` is not a calendar date
    #[error("Invalid plan start date: {0:?}")]
    InvalidStartDate(String),

    /// `raceDate` is missing or not a calendar date
    #[error("Invalid race date: {0:?}")]
    InvalidRaceDate(String),

    /// The plan has no scheduled days
    #[error("Plan has no scheduled days")]
    EmptyPlan,

    /// Date arithmetic left the supported calendar range
    #[error("Schedule dates fall outside the supported calendar range")]
    DateOutOfRange,
}

/// Result type for plan operations.
pub type PlanResult<T> = Result<T, PlanError>;
