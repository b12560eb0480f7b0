//! Error type for the candidate search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use janma_ephem::EphemerisError;
use janma_time::TimeError;
use janma_vedic_base::VedicError;

/// Errors from a rectification search.
///
/// Ephemeris failures abort the whole search; no instant is silently
/// skipped. Input problems are reported before any ephemeris call.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Malformed or out-of-range request.
    InvalidInput(String),
    /// Error from time conversion or parsing.
    Time(TimeError),
    /// The ephemeris boundary failed.
    Ephemeris(EphemerisError),
    /// Error from the rule layer.
    Vedic(VedicError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Vedic(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            Self::Vedic(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        match e {
            EphemerisError::InvalidLocation(msg) => Self::InvalidInput(msg.to_string()),
            other => Self::Ephemeris(other),
        }
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}
