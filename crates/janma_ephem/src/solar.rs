//! Low-precision apparent position of the Sun.
//!
//! Accuracy about 0.01° over 1900–2100, which is well inside the
//! 2° verification orb and the minute-scale sunrise tolerance.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25
//! (low-accuracy solar coordinates).

use janma_vedic_base::normalize_360;

use crate::frames::mean_obliquity_deg;

/// Apparent ecliptic position of the Sun, tropical of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Right ascension, degrees [0, 360).
    pub ra_deg: f64,
    /// Declination, degrees.
    pub dec_deg: f64,
}

/// Longitude of the Moon's ascending node used for the nutation and
/// aberration correction, degrees.
fn omega_deg(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Geometric true longitude of the Sun, degrees [0, 360).
pub fn sun_true_longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    normalize_360(l0 + c)
}

/// Apparent longitude and equatorial coordinates of the Sun at `t`
/// Julian centuries since J2000.0.
pub fn sun_position(t: f64) -> SolarPosition {
    let omega = omega_deg(t).to_radians();
    let lambda = normalize_360(sun_true_longitude_deg(t) - 0.00569 - 0.00478 * omega.sin());

    let eps = (mean_obliquity_deg(t) + 0.00256 * omega.cos()).to_radians();
    let lam = lambda.to_radians();
    let ra = f64::atan2(eps.cos() * lam.sin(), lam.cos());
    let dec = (eps.sin() * lam.sin()).asin();

    SolarPosition {
        longitude_deg: lambda,
        ra_deg: normalize_360(ra.to_degrees()),
        dec_deg: dec.to_degrees(),
    }
}
