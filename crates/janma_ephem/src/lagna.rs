//! Ecliptic longitude of the rising point (Lagna).
//!
//! `Asc = atan2(cos(LST), -(sin(LST)*cos(eps) + tan(phi)*sin(eps)))`
//! with the mean obliquity of date. The quadrant is chosen so the result is
//! the eastern intersection of ecliptic and horizon, about 90° ahead of the
//! MC; the bare Meeus Ch. 13 arctangent yields the setting point instead.

use janma_time::{jd_to_centuries, local_sidereal_deg};
use janma_vedic_base::normalize_360;

use crate::error::{EphemerisError, finite};
use crate::frames::mean_obliquity_deg;
use crate::gateway::GeoLocation;

/// Tropical Lagna from a local sidereal time and latitude, degrees [0, 360).
pub fn lagna_from_lst_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    normalize_360(asc.to_degrees())
}

/// Tropical (equinox of date) Lagna at `jd_ut`, degrees [0, 360).
pub fn tropical_lagna_deg(jd_ut: f64, location: &GeoLocation) -> Result<f64, EphemerisError> {
    let lst = local_sidereal_deg(jd_ut, location.longitude_deg);
    let eps = mean_obliquity_deg(jd_to_centuries(jd_ut));
    finite(
        lagna_from_lst_deg(lst, location.latitude_deg, eps),
        "ascendant longitude",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS_J2000: f64 = 23.439_279;

    #[test]
    fn equator_lst_zero_gives_cancer_point_rising() {
        // LST 0h on the equator: the 90° point rises
        let asc = lagna_from_lst_deg(0.0, 0.0, EPS_J2000);
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn equator_lst_90_gives_libra_rising() {
        let asc = lagna_from_lst_deg(90.0, 0.0, EPS_J2000);
        assert!((asc - 180.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn leads_the_midheaven() {
        // MC = atan2(sin LST, cos LST cos eps); Asc sits about a quadrant east
        for lst in [10.0_f64, 100.0, 200.0, 300.0] {
            let l = lst.to_radians();
            let mc = normalize_360(
                f64::atan2(l.sin(), l.cos() * EPS_J2000.to_radians().cos()).to_degrees(),
            );
            let lead = normalize_360(lagna_from_lst_deg(lst, 10.0, EPS_J2000) - mc);
            assert!((70.0..110.0).contains(&lead), "lst {lst}: lead {lead}");
        }
    }

    #[test]
    fn advances_through_all_signs_in_a_sidereal_day() {
        let mut prev = lagna_from_lst_deg(0.0, 28.6, EPS_J2000);
        let mut total = 0.0;
        for i in 1..=360 {
            let asc = lagna_from_lst_deg(i as f64, 28.6, EPS_J2000);
            let step = normalize_360(asc - prev);
            assert!(step > 0.0 && step < 5.0, "step {step} at lst {i}");
            total += step;
            prev = asc;
        }
        assert!((total - 360.0).abs() < 1e-6);
    }

    #[test]
    fn tropical_lagna_in_range() {
        let loc = GeoLocation::new(28.6139, 77.209).unwrap();
        let asc = tropical_lagna_deg(2_460_000.25, &loc).unwrap();
        assert!((0.0..360.0).contains(&asc));
    }
}
