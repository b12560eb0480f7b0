//! Error types for civil-time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or converting local civil time.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// UTC offset outside [-12, 14] hours, or not finite.
    InvalidUtcOffset(f64),
    /// Calendar date string could not be parsed (expects YYYY-MM-DD).
    InvalidDate(String),
    /// Clock time string could not be parsed (expects HH:MM, 00:00..23:59).
    InvalidClockTime(String),
    /// Julian Date cannot be represented as a civil timestamp.
    OutOfRange(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUtcOffset(h) => {
                write!(f, "invalid UTC offset: {h} h (expected -12..=14)")
            }
            Self::InvalidDate(s) => write!(f, "invalid date '{s}': expected YYYY-MM-DD"),
            Self::InvalidClockTime(s) => write!(f, "invalid time '{s}': expected HH:MM"),
            Self::OutOfRange(jd) => write!(f, "JD {jd} is outside the civil calendar range"),
        }
    }
}

impl Error for TimeError {}
