//! Gulika: Saturn's khanda of the day or night.
//!
//! Day (sunrise → sunset) and night (sunset → next sunrise) are each divided
//! into 8 equal khandas. Khanda lords follow the weekday cycle Sun, Moon,
//! Mars, Mercury, Jupiter, Venus, Saturn starting from the weekday lord (day)
//! or the lord five weekdays ahead (night). The 8th khanda has no lord and
//! is never Saturn's. Gulika is the lagna rising at the midpoint of Saturn's
//! khanda; the lagna itself comes from the ephemeris layer.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Number of khandas in a day or night span.
pub const KHANDAS_PER_SPAN: u8 = 8;

/// Saturn's position in the weekday cycle (Sun = 0).
const SATURN_WEEKDAY: u8 = 6;

/// Offset of the night cycle's starting lord from the day's lord (5th lord).
const NIGHT_LORD_OFFSET: u8 = 4;

/// Weekday index with Sunday = 0 .. Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Saturn's khanda (0-6) during the day for a weekday (Sunday = 0).
pub const fn day_gulika_khanda(weekday: u8) -> u8 {
    (SATURN_WEEKDAY + 7 - weekday % 7) % 7
}

/// Saturn's khanda (0-6) during the night for a weekday (Sunday = 0).
pub const fn night_gulika_khanda(weekday: u8) -> u8 {
    let start = (weekday % 7 + NIGHT_LORD_OFFSET) % 7;
    (SATURN_WEEKDAY + 7 - start) % 7
}

/// Start and end of khanda `index` when `[start, end]` is cut into 8 parts.
pub fn khanda_range(
    index: u8,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> (NaiveDateTime, NaiveDateTime) {
    let part_ms = (end - start).num_milliseconds() / i64::from(KHANDAS_PER_SPAN);
    let k_start = start + Duration::milliseconds(part_ms * i64::from(index));
    (k_start, k_start + Duration::milliseconds(part_ms))
}

/// Midpoint of khanda `index` within `[start, end]`.
pub fn khanda_midpoint(index: u8, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
    let (k_start, k_end) = khanda_range(index, start, end);
    k_start + (k_end - k_start) / 2
}

/// Whether a moment belongs to the day span, sunrise and sunset inclusive.
pub fn is_daytime(moment: NaiveDateTime, sunrise: NaiveDateTime, sunset: NaiveDateTime) -> bool {
    sunrise <= moment && moment <= sunset
}

/// Gulika khanda selection for one calendar date, before any lagna lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GulikaKhandas {
    pub weekday: u8,
    pub day_khanda: u8,
    pub night_khanda: u8,
    pub day_mid_time: NaiveDateTime,
    pub night_mid_time: NaiveDateTime,
}

impl GulikaKhandas {
    /// Select Saturn's khandas for `date` given its sunrise, sunset and the
    /// following day's sunrise (all local civil time).
    pub fn for_date(
        date: NaiveDate,
        sunrise: NaiveDateTime,
        sunset: NaiveDateTime,
        next_sunrise: NaiveDateTime,
    ) -> Self {
        let weekday = weekday_index(date);
        let day_khanda = day_gulika_khanda(weekday);
        let night_khanda = night_gulika_khanda(weekday);
        Self {
            weekday,
            day_khanda,
            night_khanda,
            day_mid_time: khanda_midpoint(day_khanda, sunrise, sunset),
            night_mid_time: khanda_midpoint(night_khanda, sunset, next_sunrise),
        }
    }

    /// Attach the lagna longitudes rising at the two mid-times.
    pub fn with_degrees(self, day_degree: f64, night_degree: f64) -> GulikaResult {
        GulikaResult {
            day_degree,
            night_degree,
            day_mid_time: self.day_mid_time,
            night_mid_time: self.night_mid_time,
            day_khanda: self.day_khanda,
            night_khanda: self.night_khanda,
        }
    }
}

/// Day and night Gulika for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GulikaResult {
    /// Sidereal lagna at the day khanda midpoint.
    pub day_degree: f64,
    /// Sidereal lagna at the night khanda midpoint.
    pub night_degree: f64,
    pub day_mid_time: NaiveDateTime,
    pub night_mid_time: NaiveDateTime,
    pub day_khanda: u8,
    pub night_khanda: u8,
}

impl GulikaResult {
    /// Gulika longitude matching the time of day of `moment`.
    pub fn for_moment(
        &self,
        moment: NaiveDateTime,
        sunrise: NaiveDateTime,
        sunset: NaiveDateTime,
    ) -> f64 {
        if is_daytime(moment, sunrise, sunset) {
            self.day_degree
        } else {
            self.night_degree
        }
    }
}
