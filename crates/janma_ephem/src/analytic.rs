//! Self-contained analytic ephemeris.
//!
//! Tropical positions of date from the solar, lunar and Keplerian theories
//! in this crate, shifted by the configured ayanamsha. UT is used directly
//! as the dynamical time argument; ΔT (about a minute today) moves the Moon
//! by well under a minute of arc and the other bodies by far less.

use chrono::{NaiveDate, NaiveDateTime};
use janma_time::{jd_to_centuries, jd_to_local};
use janma_vedic_base::{GrahaLongitudes, normalize_360};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::error::{EphemerisError, finite};
use crate::frames::{general_precession_longitude_deg, mean_node_deg};
use crate::gateway::{EphemerisGateway, GeoLocation};
use crate::lagna::tropical_lagna_deg;
use crate::lunar::moon_longitude_deg;
use crate::planets::{OrbitBody, geocentric_longitude_j2000_deg};
use crate::riseset::sunrise_sunset_jd;
use crate::solar::sun_position;

/// Order of the independently computed bodies fed to
/// [`GrahaLongitudes::from_eight`] after the Sun and Moon.
const PLANET_BODIES: [OrbitBody; 5] = [
    OrbitBody::Mars,
    OrbitBody::Mercury,
    OrbitBody::Jupiter,
    OrbitBody::Venus,
    OrbitBody::Saturn,
];

/// Analytic gateway with a selectable ayanamsha.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticEphemeris {
    pub ayanamsha: AyanamshaSystem,
}

impl AnalyticEphemeris {
    pub fn new(ayanamsha: AyanamshaSystem) -> Self {
        Self { ayanamsha }
    }

    fn to_sidereal(&self, tropical_deg: f64, jd_ut: f64) -> f64 {
        normalize_360(tropical_deg - ayanamsha_deg(self.ayanamsha, jd_ut))
    }

    /// Tropical longitudes of date in `from_eight` order.
    fn tropical_eight(jd_ut: f64) -> [f64; 8] {
        let t = jd_to_centuries(jd_ut);
        let precession = general_precession_longitude_deg(t);
        let mut out = [0.0; 8];
        out[0] = sun_position(t).longitude_deg;
        out[1] = moon_longitude_deg(t);
        for (slot, body) in out[2..7].iter_mut().zip(PLANET_BODIES) {
            *slot = geocentric_longitude_j2000_deg(body, t) + precession;
        }
        out[7] = mean_node_deg(t);
        out
    }
}

impl EphemerisGateway for AnalyticEphemeris {
    fn ascendant_longitude(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
    ) -> Result<f64, EphemerisError> {
        let tropical = tropical_lagna_deg(finite(jd_ut, "time")?, location)?;
        finite(self.to_sidereal(tropical, jd_ut), "ascendant longitude")
    }

    fn planet_longitudes(&self, jd_ut: f64) -> Result<GrahaLongitudes, EphemerisError> {
        let jd_ut = finite(jd_ut, "time")?;
        let mut sidereal = [0.0; 8];
        for (slot, tropical) in sidereal.iter_mut().zip(Self::tropical_eight(jd_ut)) {
            *slot = finite(self.to_sidereal(tropical, jd_ut), "planet longitude")?;
        }
        Ok(GrahaLongitudes::from_eight(sidereal))
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        utc_offset_hours: f64,
    ) -> Result<(NaiveDateTime, NaiveDateTime), EphemerisError> {
        let (rise, set) = sunrise_sunset_jd(date, location, utc_offset_hours)?;
        Ok((
            jd_to_local(rise, utc_offset_hours)?,
            jd_to_local(set, utc_offset_hours)?,
        ))
    }
}
