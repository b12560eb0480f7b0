//! Error types for the ephemeris boundary.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use janma_time::TimeError;

/// Errors from ephemeris queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// A computed quantity was NaN or infinite.
    NonFinite(&'static str),
    /// Output that is finite but self-contradictory.
    Inconsistent(&'static str),
    /// Latitude or longitude outside the valid range.
    InvalidLocation(&'static str),
    /// The Sun stays below the horizon all day (polar night).
    NeverRises(NaiveDate),
    /// The Sun stays above the horizon all day (midnight sun).
    NeverSets(NaiveDate),
    /// Error from time conversion.
    Time(TimeError),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite(what) => write!(f, "non-finite {what}"),
            Self::Inconsistent(what) => write!(f, "inconsistent ephemeris output: {what}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NeverRises(d) => write!(f, "sun does not rise on {d}"),
            Self::NeverSets(d) => write!(f, "sun does not set on {d}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for EphemerisError {}

impl From<TimeError> for EphemerisError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Pass a value through if finite.
pub(crate) fn finite(value: f64, what: &'static str) -> Result<f64, EphemerisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisError::NonFinite(what))
    }
}
