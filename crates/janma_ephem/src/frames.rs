//! Precession, obliquity and the lunar node argument.
//!
//! Sources:
//! - General precession in longitude: IAU 2006 (Capitaine et al. 2003).
//! - Mean obliquity: IAU 2006, Eq. 39.
//! - Ω (mean longitude of the Moon's node): IERS Conventions 2010, Table 5.2e.

use janma_vedic_base::normalize_360;

/// General precession in longitude, arcseconds, `t` in Julian centuries
/// since J2000.0.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t2 * t - 0.000023857 * t2 * t2
        - 0.0000000383 * t2 * t2 * t
}

/// General precession in longitude, degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Mean obliquity of the ecliptic of date, degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84381.406 - 46.836769 * t - 0.0001831 * t * t + 0.00200340 * t.powi(3)
        - 0.000000576 * t.powi(4)
        - 0.0000000434 * t.powi(5);
    arcsec / 3600.0
}

/// Mean longitude of the Moon's ascending node, degrees of date, [0, 360).
pub fn mean_node_deg(t: f64) -> f64 {
    let t2 = t * t;
    let arcsec = 450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t2 * t
        - 0.00005939 * t2 * t2;
    normalize_360(arcsec / 3600.0)
}
