//! Deterministic in-memory gateway for search tests.
//!
//! The lagna turns once per civil day starting at 1° at local midnight of
//! the anchor date (UTC+0), so no instant on a 10-minute grid sits on a
//! sign cusp; the Moon rides on the lagna, sunrise is 06:00
//! and sunset 18:00 on every date.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{NaiveDate, NaiveDateTime};
use janma_ephem::{EphemerisError, EphemerisGateway, GeoLocation};
use janma_time::local_to_jd;
use janma_vedic_base::{GrahaLongitudes, normalize_360};

pub const SUN: f64 = 15.0;
pub const SATURN: f64 = 300.0;

pub fn anchor_date() -> NaiveDate {
    // a Wednesday
    NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
}

pub fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, 0).unwrap()
}

pub struct SweepSky {
    epoch_jd: f64,
    calls: AtomicUsize,
    fail_planets_after: Option<usize>,
    polar: bool,
}

impl SweepSky {
    pub fn new() -> Self {
        Self {
            epoch_jd: local_to_jd(at(anchor_date(), 0, 0), 0.0),
            calls: AtomicUsize::new(0),
            fail_planets_after: None,
            polar: false,
        }
    }

    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_planets_after: Some(n),
            ..Self::new()
        }
    }

    pub fn polar() -> Self {
        Self {
            polar: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lagna(&self, jd: f64) -> f64 {
        normalize_360((jd - self.epoch_jd) * 360.0 + 1.0)
    }
}

impl EphemerisGateway for SweepSky {
    fn ascendant_longitude(&self, jd_ut: f64, _: &GeoLocation) -> Result<f64, EphemerisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lagna(jd_ut))
    }

    fn planet_longitudes(&self, jd_ut: f64) -> Result<GrahaLongitudes, EphemerisError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_planets_after.is_some_and(|limit| n >= limit) {
            return Err(EphemerisError::NonFinite("planet longitude"));
        }
        let moon = self.lagna(jd_ut);
        Ok(GrahaLongitudes::from_eight([
            SUN, moon, 200.0, 20.0, 250.0, 40.0, SATURN, 100.0,
        ]))
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        _: &GeoLocation,
        _: f64,
    ) -> Result<(NaiveDateTime, NaiveDateTime), EphemerisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.polar {
            return Err(EphemerisError::NeverRises(date));
        }
        Ok((at(date, 6, 0), at(date, 18, 0)))
    }
}
