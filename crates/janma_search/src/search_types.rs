//! Request, window, option and result types for the candidate search.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use janma_config::{CompositeWeights, DEFAULT_STEP_MINUTES, RectifyConfig};
use janma_ephem::GeoLocation;
use janma_time::{IshtaKala, parse_clock_time, validate_utc_offset};
use janma_vedic_base::{
    DEFAULT_ORB_DEG, EventScores, GrahaLongitudes, LifeEvents, NishekaResult, PhysicalTraits,
    Rashi, SpecialLagnaSet, TraitScores, VerificationScores,
};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Birth date and place, fixed for one search.
///
/// Deserialization goes through [`GeoTime::new`]. Values built as struct
/// literals are re-checked by every search entry point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoTime")]
pub struct GeoTime {
    /// Local civil date of birth.
    pub date: NaiveDate,
    pub location: GeoLocation,
    /// Fixed offset from UTC in hours (no DST rules).
    pub utc_offset_hours: f64,
}

impl GeoTime {
    /// Validate coordinates and offset.
    pub fn new(
        date: NaiveDate,
        latitude_deg: f64,
        longitude_deg: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, SearchError> {
        let location = GeoLocation::new(latitude_deg, longitude_deg)?;
        validate_utc_offset(utc_offset_hours)?;
        Ok(Self {
            date,
            location,
            utc_offset_hours,
        })
    }

    /// Re-check coordinates and offset of an already built value.
    pub fn validate(&self) -> Result<(), SearchError> {
        Self::new(
            self.date,
            self.location.latitude_deg,
            self.location.longitude_deg,
            self.utc_offset_hours,
        )
        .map(|_| ())
    }
}

#[derive(Deserialize)]
struct RawGeoTime {
    date: NaiveDate,
    location: GeoLocation,
    utc_offset_hours: f64,
}

impl TryFrom<RawGeoTime> for GeoTime {
    type Error = SearchError;

    fn try_from(raw: RawGeoTime) -> Result<Self, Self::Error> {
        Self::new(
            raw.date,
            raw.location.latitude_deg,
            raw.location.longitude_deg,
            raw.utc_offset_hours,
        )
    }
}

/// Which local times of the birth date to scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum SearchWindow {
    /// `[start, end]`; an end at or before the start crosses midnight.
    Explicit { start: NaiveTime, end: NaiveTime },
    /// Birth time unknown: 00:00 to 23:59.
    WholeDay,
    /// `center ± half_width_hours`, rendered as clock times on the birth date.
    Approximate { center: NaiveTime, half_width_hours: f64 },
}

impl SearchWindow {
    /// Explicit window from `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, SearchError> {
        Ok(Self::Explicit {
            start: parse_clock_time(start)?,
            end: parse_clock_time(end)?,
        })
    }

    /// Approximate window around an `HH:MM` centre.
    pub fn around(center: &str, half_width_hours: f64) -> Result<Self, SearchError> {
        Ok(Self::Approximate {
            center: parse_clock_time(center)?,
            half_width_hours,
        })
    }

    /// Start and end clock times, before the midnight rule is applied.
    pub fn clock_bounds(&self) -> Result<(NaiveTime, NaiveTime), SearchError> {
        match *self {
            Self::Explicit { start, end } => Ok((start, end)),
            Self::WholeDay => Ok((NaiveTime::MIN, hm(23, 59))),
            Self::Approximate {
                center,
                half_width_hours,
            } => {
                if !half_width_hours.is_finite()
                    || half_width_hours <= 0.0
                    || half_width_hours > 12.0
                {
                    return Err(SearchError::InvalidInput(format!(
                        "approximate window half-width must be in (0, 12] hours, got {half_width_hours}"
                    )));
                }
                let half = TimeDelta::milliseconds((half_width_hours * 3_600_000.0) as i64);
                let (start, _) = center.overflowing_sub_signed(half);
                let (end, _) = center.overflowing_add_signed(half);
                Ok((whole_minute(start), whole_minute(end)))
            }
        }
    }

    /// Concrete local bounds on `date`. An end at or before the start is
    /// moved to the following day.
    pub fn bounds(&self, date: NaiveDate) -> Result<(NaiveDateTime, NaiveDateTime), SearchError> {
        let (start, end) = self.clock_bounds()?;
        let start_dt = date.and_time(start);
        let mut end_dt = date.and_time(end);
        if end_dt <= start_dt {
            end_dt = end_dt
                .checked_add_days(Days::new(1))
                .ok_or_else(|| SearchError::InvalidInput("window end out of range".into()))?;
        }
        Ok((start_dt, end_dt))
    }
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

/// Drop seconds, as an `HH:MM` rendering would.
fn whole_minute(t: NaiveTime) -> NaiveTime {
    hm(t.hour(), t.minute())
}

/// Tunables for one search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub step_minutes: u32,
    pub orb_deg: f64,
    pub weights: CompositeWeights,
    pub max_candidates: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            step_minutes: DEFAULT_STEP_MINUTES,
            orb_deg: DEFAULT_ORB_DEG,
            weights: CompositeWeights::default(),
            max_candidates: None,
        }
    }
}

impl SearchOptions {
    pub fn from_config(config: &RectifyConfig) -> Self {
        Self {
            step_minutes: config.step_minutes,
            orb_deg: config.orb_deg,
            weights: config.weights,
            max_candidates: config.max_candidates,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SearchError> {
        if self.step_minutes == 0 {
            return Err(SearchError::InvalidInput("step must be at least 1 minute".into()));
        }
        if self.max_candidates == Some(0) {
            return Err(SearchError::InvalidInput("max_candidates must be at least 1".into()));
        }
        self.weights
            .validate()
            .map_err(|e| SearchError::InvalidInput(e.to_string()))
    }
}

/// Everything the caller knows about the birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub geo: GeoTime,
    pub window: SearchWindow,
    #[serde(default)]
    pub traits: Option<PhysicalTraits>,
    #[serde(default)]
    pub events: Option<LifeEvents>,
}

impl SearchRequest {
    pub fn new(geo: GeoTime, window: SearchWindow) -> Self {
        Self {
            geo,
            window,
            traits: None,
            events: None,
        }
    }

    pub fn with_traits(mut self, traits: PhysicalTraits) -> Self {
        self.traits = Some(traits);
        self
    }

    pub fn with_events(mut self, events: LifeEvents) -> Self {
        self.events = Some(events);
        self
    }
}

/// One accepted candidate instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Local civil time.
    pub time: NaiveDateTime,
    pub jd_ut: f64,
    /// Sidereal lagna.
    pub lagna: f64,
    pub lagna_sign: Rashi,
    /// Sphuta Pranapada, the verification anchor.
    pub pranapada: f64,
    pub madhya_pranapada: f64,
    /// Gulika for the matching half of the day.
    pub gulika: f64,
    pub is_daytime: bool,
    pub ishta: IshtaKala,
    pub planets: GrahaLongitudes,
    pub verification: VerificationScores,
    pub special_lagnas: SpecialLagnaSet,
    pub nisheka: NishekaResult,
    pub traits: Option<TraitScores>,
    pub events: Option<EventScores>,
    pub composite_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()
    }

    fn at(d: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        d.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn geo_time_rejects_bad_inputs() {
        assert!(matches!(
            GeoTime::new(date(), 95.0, 0.0, 0.0),
            Err(SearchError::InvalidInput(_))
        ));
        assert!(matches!(
            GeoTime::new(date(), 0.0, 0.0, 15.0),
            Err(SearchError::Time(_))
        ));
        assert!(GeoTime::new(date(), 19.07, 72.88, 5.5).is_ok());
    }

    #[test]
    fn geo_time_literal_is_rechecked() {
        let mut geo = GeoTime::new(date(), 19.07, 72.88, 5.5).unwrap();
        assert!(geo.validate().is_ok());
        geo.location.latitude_deg = 123.0;
        assert!(matches!(geo.validate(), Err(SearchError::InvalidInput(_))));
        geo.location.latitude_deg = 19.07;
        geo.utc_offset_hours = 40.0;
        assert!(matches!(geo.validate(), Err(SearchError::Time(_))));
    }

    #[test]
    fn geo_time_deserialization_validates() {
        let ok = r#"{"date":"1990-05-17","location":{"latitude_deg":19.07,"longitude_deg":72.88},"utc_offset_hours":5.5}"#;
        let geo: GeoTime = serde_json::from_str(ok).unwrap();
        assert_eq!(geo, GeoTime::new(date(), 19.07, 72.88, 5.5).unwrap());

        let bad_lat = r#"{"date":"1990-05-17","location":{"latitude_deg":123.0,"longitude_deg":72.88},"utc_offset_hours":5.5}"#;
        assert!(serde_json::from_str::<GeoTime>(bad_lat).is_err());
        let bad_lon = r#"{"date":"1990-05-17","location":{"latitude_deg":19.07,"longitude_deg":999.0},"utc_offset_hours":5.5}"#;
        assert!(serde_json::from_str::<GeoTime>(bad_lon).is_err());
        let bad_tz = r#"{"date":"1990-05-17","location":{"latitude_deg":19.07,"longitude_deg":72.88},"utc_offset_hours":99.0}"#;
        assert!(serde_json::from_str::<GeoTime>(bad_tz).is_err());
    }

    #[test]
    fn explicit_window() {
        let w = SearchWindow::parse("06:00", "08:30").unwrap();
        assert_eq!(w.bounds(date()).unwrap(), (at(date(), 6, 0), at(date(), 8, 30)));
    }

    #[test]
    fn window_crossing_midnight_wraps() {
        let w = SearchWindow::parse("22:00", "02:00").unwrap();
        let next = date().succ_opt().unwrap();
        assert_eq!(w.bounds(date()).unwrap(), (at(date(), 22, 0), at(next, 2, 0)));
    }

    #[test]
    fn equal_bounds_span_a_full_day() {
        let w = SearchWindow::parse("05:00", "05:00").unwrap();
        let (s, e) = w.bounds(date()).unwrap();
        assert_eq!(e - s, TimeDelta::hours(24));
    }

    #[test]
    fn whole_day() {
        let (s, e) = SearchWindow::WholeDay.bounds(date()).unwrap();
        assert_eq!(s, at(date(), 0, 0));
        assert_eq!(e, at(date(), 23, 59));
    }

    #[test]
    fn approximate_window() {
        let w = SearchWindow::around("14:30", 3.0).unwrap();
        assert_eq!(w.bounds(date()).unwrap(), (at(date(), 11, 30), at(date(), 17, 30)));
    }

    #[test]
    fn approximate_window_truncates_after_subtracting() {
        // 2.51 h = 2 h 30 min 36 s: 09:29:24 and 14:30:36 shown as whole minutes
        let w = SearchWindow::around("12:00", 2.51).unwrap();
        assert_eq!(w.bounds(date()).unwrap(), (at(date(), 9, 29), at(date(), 14, 30)));
    }

    #[test]
    fn approximate_window_near_midnight_uses_clock_times() {
        let w = SearchWindow::around("01:00", 3.0).unwrap();
        let next = date().succ_opt().unwrap();
        // 22:00 on the birth date through 04:00 the next morning
        assert_eq!(w.bounds(date()).unwrap(), (at(date(), 22, 0), at(next, 4, 0)));
    }

    #[test]
    fn approximate_window_rejects_bad_width() {
        let w = SearchWindow::around("12:00", 0.0).unwrap();
        assert!(w.bounds(date()).is_err());
        let w = SearchWindow::around("12:00", f64::NAN).unwrap();
        assert!(w.bounds(date()).is_err());
    }

    #[test]
    fn clock_parse_errors_surface() {
        assert!(matches!(
            SearchWindow::parse("24:00", "01:00"),
            Err(SearchError::Time(_))
        ));
        assert!(SearchWindow::around("12:60", 1.0).is_err());
    }

    #[test]
    fn options_validation() {
        assert!(SearchOptions::default().validate().is_ok());
        let zero = SearchOptions {
            step_minutes: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(SearchError::InvalidInput(_))));
    }

    #[test]
    fn options_from_config() {
        let cfg = RectifyConfig {
            step_minutes: 4,
            max_candidates: Some(2),
            ..Default::default()
        };
        let o = SearchOptions::from_config(&cfg);
        assert_eq!(o.step_minutes, 4);
        assert_eq!(o.max_candidates, Some(2));
    }
}
