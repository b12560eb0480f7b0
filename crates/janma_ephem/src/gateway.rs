//! The ephemeris boundary consumed by the rectification search.

use chrono::{NaiveDate, NaiveDateTime};
use janma_vedic_base::GrahaLongitudes;

use crate::error::EphemerisError;

/// Observer location on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLocation"))]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location, rejecting out-of-range or non-finite coordinates.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, EphemerisError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EphemerisError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLocation> for GeoLocation {
    type Error = EphemerisError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Self::new(raw.latitude_deg, raw.longitude_deg)
    }
}

/// Source of sidereal positions, the rising degree and solar day bounds.
///
/// Every longitude returned is sidereal; callers apply no ayanamsha of
/// their own. Implementations must be deterministic for identical inputs.
pub trait EphemerisGateway: Send + Sync {
    /// Sidereal longitude of the Lagna at `jd_ut`, degrees [0, 360).
    fn ascendant_longitude(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
    ) -> Result<f64, EphemerisError>;

    /// Sidereal longitudes of all nine grahas at `jd_ut`.
    fn planet_longitudes(&self, jd_ut: f64) -> Result<GrahaLongitudes, EphemerisError>;

    /// Local civil sunrise and sunset (solar disc centre) on `date`.
    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        utc_offset_hours: f64,
    ) -> Result<(NaiveDateTime, NaiveDateTime), EphemerisError>;
}

impl<T: EphemerisGateway + ?Sized> EphemerisGateway for &T {
    fn ascendant_longitude(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
    ) -> Result<f64, EphemerisError> {
        (**self).ascendant_longitude(jd_ut, location)
    }

    fn planet_longitudes(&self, jd_ut: f64) -> Result<GrahaLongitudes, EphemerisError> {
        (**self).planet_longitudes(jd_ut)
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        utc_offset_hours: f64,
    ) -> Result<(NaiveDateTime, NaiveDateTime), EphemerisError> {
        (**self).sunrise_sunset(date, location, utc_offset_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_bounds() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(matches!(
            GeoLocation::new(90.5, 0.0),
            Err(EphemerisError::InvalidLocation(_))
        ));
        assert!(matches!(
            GeoLocation::new(0.0, -181.0),
            Err(EphemerisError::InvalidLocation(_))
        ));
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }
}
