//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use janma_time::TimeError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from time conversion.
    Time(TimeError),
    /// Divisional chart with zero divisions.
    InvalidDivision(u16),
    /// Orb tolerance not finite or not positive.
    InvalidOrb(f64),
    /// Unrecognised trait category name.
    UnknownTrait(String),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidDivision(d) => write!(f, "invalid division count: {d}"),
            Self::InvalidOrb(o) => write!(f, "orb must be positive and finite, got {o}"),
            Self::UnknownTrait(s) => write!(f, "unknown trait category: {s}"),
        }
    }
}

impl Error for VedicError {}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
