//! Per-date invariants: sunrise, sunset, next sunrise and both Gulikas.
//!
//! Computed once per birth date and shared read-only by every candidate
//! instant of that date.

use chrono::{Days, NaiveDateTime};
use janma_ephem::{EphemerisError, EphemerisGateway};
use janma_time::local_to_jd;
use janma_vedic_base::{GulikaKhandas, GulikaResult, is_daytime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SearchError;
use crate::search_types::GeoTime;

/// Sunrise/sunset bounds and Gulika for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyContext {
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    /// Sunrise of the following date, closing the night span.
    pub next_sunrise: NaiveDateTime,
    pub gulika: GulikaResult,
}

impl DailyContext {
    /// Query the gateway for the date's solar bounds and Gulika lagnas.
    pub fn compute<G: EphemerisGateway + ?Sized>(
        gateway: &G,
        geo: &GeoTime,
    ) -> Result<Self, SearchError> {
        geo.validate()?;
        let (sunrise, sunset) = sunrise_sunset(gateway, geo)?;
        let next_date = geo
            .date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| SearchError::InvalidInput("date out of range".into()))?;
        let (next_sunrise, _) =
            gateway.sunrise_sunset(next_date, &geo.location, geo.utc_offset_hours)?;

        let khandas = GulikaKhandas::for_date(geo.date, sunrise, sunset, next_sunrise);
        let day_degree = gateway.ascendant_longitude(
            local_to_jd(khandas.day_mid_time, geo.utc_offset_hours),
            &geo.location,
        )?;
        let night_degree = gateway.ascendant_longitude(
            local_to_jd(khandas.night_mid_time, geo.utc_offset_hours),
            &geo.location,
        )?;
        let gulika = khandas.with_degrees(day_degree, night_degree);

        debug!(
            date = %geo.date,
            %sunrise,
            %sunset,
            %next_sunrise,
            day_khanda = gulika.day_khanda,
            night_khanda = gulika.night_khanda,
            day_gulika = gulika.day_degree,
            night_gulika = gulika.night_degree,
            "daily context"
        );

        Ok(Self {
            sunrise,
            sunset,
            next_sunrise,
            gulika,
        })
    }

    /// Whether `moment` falls within `[sunrise, sunset]`.
    pub fn is_daytime(&self, moment: NaiveDateTime) -> bool {
        is_daytime(moment, self.sunrise, self.sunset)
    }

    /// Gulika longitude for the half of the day containing `moment`.
    pub fn gulika_at(&self, moment: NaiveDateTime) -> f64 {
        self.gulika.for_moment(moment, self.sunrise, self.sunset)
    }
}

/// Local sunrise and sunset on the birth date.
pub fn sunrise_sunset<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    geo: &GeoTime,
) -> Result<(NaiveDateTime, NaiveDateTime), SearchError> {
    geo.validate()?;
    let (rise, set) = gateway.sunrise_sunset(geo.date, &geo.location, geo.utc_offset_hours)?;
    if set <= rise {
        return Err(EphemerisError::Inconsistent("sunset not after sunrise").into());
    }
    Ok((rise, set))
}

/// Day and night Gulika for the birth date.
pub fn gulika_for_date<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    geo: &GeoTime,
) -> Result<GulikaResult, SearchError> {
    Ok(DailyContext::compute(gateway, geo)?.gulika)
}
