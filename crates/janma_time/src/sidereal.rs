//! Greenwich and local mean sidereal time, in degrees.
//!
//! UT is used in place of UT1; the sub-second difference is far below the
//! resolution of a ten-minute candidate grid.
//!
//! Sources:
//! - Earth Rotation Angle: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Sidereal turns per solar day (rate of the Earth Rotation Angle).
pub const SIDEREAL_RATE: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle in degrees, [0, 360).
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let turns = 0.779_057_273_264_0 + SIDEREAL_RATE * du;
    (turns.rem_euclid(1.0)) * 360.0
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t * t
        - 0.00000044 * t.powi(3)
        - 0.000029956 * t.powi(4)
        - 0.0000000368 * t.powi(5);
    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local mean sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_deg(jd_ut: f64, east_longitude_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + east_longitude_deg).rem_euclid(360.0)
}
