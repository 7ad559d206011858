//! Pace string parsing and formatting.
//!
//! Paces are seconds per kilometer held in an `f64`. A pace that could not be
//! determined is [`UNAVAILABLE`] (NaN) and formats as `"N/A"`, so one bad cell
//! in the sheet only blanks the pace annotations instead of failing the load.

use thiserror::Error;

/// Sentinel for a pace that could not be determined.
pub const UNAVAILABLE: f64 = f64::NAN;

/// Text shown for an unavailable pace.
pub const NOT_AVAILABLE: &str = "N/A";

/// Reasons a pace string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaceError {
    /// Nothing to parse
    #[error("Pace is empty")]
    Empty,

    /// Not of the form `mm:ss`
    #[error("Pace must look like mm:ss, got {0:?}")]
    Malformed(String),

    /// A component is not a whole number
    #[error("Pace component is not a number: {0:?}")]
    NonNumeric(String),

    /// Seconds outside `0..60`
    #[error("Pace seconds must be below 60, got {0}")]
    SecondsOutOfRange(u32),
}

/// Parse an `mm:ss` pace into seconds per kilometer.
pub fn parse_pace(input: &str) -> Result<f64, PaceError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PaceError::Empty);
    }

    let (minutes, seconds) = input
        .split_once(':')
        .ok_or_else(|| PaceError::Malformed(input.to_string()))?;
    if seconds.contains(':') {
        return Err(PaceError::Malformed(input.to_string()));
    }

    let minutes = parse_component(minutes)?;
    let seconds = parse_component(seconds)?;
    if seconds >= 60 {
        return Err(PaceError::SecondsOutOfRange(seconds));
    }

    Ok(f64::from(minutes) * 60.0 + f64::from(seconds))
}

/// Parse a pace, degrading to [`UNAVAILABLE`] on any error.
pub fn parse_pace_or_unavailable(input: &str) -> f64 {
    match parse_pace(input) {
        Ok(seconds) => seconds,
        Err(e) => {
            tracing::warn!("Pace annotations unavailable: {}", e);
            UNAVAILABLE
        }
    }
}

fn parse_component(part: &str) -> Result<u32, PaceError> {
    let part = part.trim();
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(PaceError::NonNumeric(part.to_string()));
    }
    part.parse()
        .map_err(|_| PaceError::NonNumeric(part.to_string()))
}

/// Whether a value is a usable pace.
pub fn is_available(seconds: f64) -> bool {
    seconds.is_finite() && seconds >= 0.0
}

/// Round to whole seconds, ties to even, so `286.5` shows as `4:46`.
fn whole_seconds(seconds: f64) -> Option<u64> {
    if !is_available(seconds) {
        return None;
    }
    Some(seconds.round_ties_even() as u64)
}

/// Format seconds per kilometer as `m:ss`.
///
/// Negative or non-finite input gives `"N/A"`.
pub fn format_pace(seconds: f64) -> String {
    match whole_seconds(seconds) {
        Some(total) => format!("{}:{:02}", total / 60, total % 60),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a duration as `m:ss`, or `h:mm:ss` from one hour up.
pub fn format_duration(seconds: f64) -> String {
    match whole_seconds(seconds) {
        Some(total) if total >= 3600 => {
            format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
        }
        Some(total) => format!("{}:{:02}", total / 60, total % 60),
        None => NOT_AVAILABLE.to_string(),
    }
}
