//! Time conversions for birth-time rectification.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - Local civil time ↔ Julian Date (UT) with a fixed UTC offset
//! - Ishta-kala (ghati/pala) elapsed-time units
//! - Greenwich and local mean sidereal time

pub mod civil;
pub mod error;
pub mod ishta;
pub mod julian;
pub mod sidereal;

pub use civil::{
    MAX_UTC_OFFSET_HOURS, MIN_UTC_OFFSET_HOURS, date_to_jd_midnight_ut, jd_to_local, local_to_jd,
    parse_clock_time, parse_date, validate_utc_offset,
};
pub use error::TimeError;
pub use ishta::{GHATIS_PER_DAY, IshtaKala, PALAS_PER_GHATI, SECONDS_PER_PALA};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
    jd_to_centuries,
};
pub use sidereal::{SIDEREAL_RATE, earth_rotation_angle_deg, gmst_deg, local_sidereal_deg};
