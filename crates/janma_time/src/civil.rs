//! Local civil time ↔ Julian Date (UT) with a fixed UTC offset.
//!
//! No daylight-saving rules: the offset is applied as given. Conversions are
//! lossless to well under a second (f64 JD carries ~50 µs near the present).

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd};

/// Smallest accepted UTC offset in hours.
pub const MIN_UTC_OFFSET_HOURS: f64 = -12.0;

/// Largest accepted UTC offset in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Reject offsets outside [-12, 14] hours.
pub fn validate_utc_offset(offset_hours: f64) -> Result<(), TimeError> {
    if offset_hours.is_finite()
        && (MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&offset_hours)
    {
        Ok(())
    } else {
        Err(TimeError::InvalidUtcOffset(offset_hours))
    }
}

/// Local naive timestamp to Julian Date (UT).
///
/// `offset_hours` is east-positive (IST = +5.5).
pub fn local_to_jd(local: NaiveDateTime, offset_hours: f64) -> f64 {
    let utc = local.and_utc();
    let seconds = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9
        - offset_hours * 3600.0;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Julian Date (UT) back to a local naive timestamp, rounded to the millisecond.
pub fn jd_to_local(jd: f64, offset_hours: f64) -> Result<NaiveDateTime, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::OutOfRange(jd));
    }
    let seconds = (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY + offset_hours * 3600.0;
    let millis = (seconds * 1000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .map(|dt| dt.naive_utc())
        .ok_or(TimeError::OutOfRange(jd))
}

/// Julian Date at 00:00 UT of a calendar date.
pub fn date_to_jd_midnight_ut(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), f64::from(date.day()))
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` clock time (hours 0-23, minutes 0-59).
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, TimeError> {
    let invalid = || TimeError::InvalidClockTime(s.to_string());
    let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
    let hour: u32 = h.parse().map_err(|_| invalid())?;
    let minute: u32 = m.parse().map_err(|_| invalid())?;
    if hour >= 24 || minute >= 60 {
        return Err(invalid());
    }
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn utc_noon_j2000() {
        let jd = local_to_jd(ts(2000, 1, 1, 12, 0, 0), 0.0);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn ist_offset_subtracted() {
        // 17:30 IST = 12:00 UT
        let jd = local_to_jd(ts(2000, 1, 1, 17, 30, 0), 5.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn negative_offset_crosses_date() {
        // 20:00 at UTC-5 on Dec 31 = 01:00 UT on Jan 1
        let jd = local_to_jd(ts(1999, 12, 31, 20, 0, 0), -5.0);
        let expected = calendar_to_jd(2000, 1, 1.0 + 1.0 / 24.0);
        assert!((jd - expected).abs() < 1e-9);
    }

    #[test]
    fn inverse_is_exact_to_the_second() {
        let local = ts(1987, 6, 14, 4, 37, 21);
        let back = jd_to_local(local_to_jd(local, 9.5), 9.5).unwrap();
        let diff = (back - local).num_milliseconds().abs();
        assert!(diff < 1000, "drift {diff} ms");
    }

    #[test]
    fn midnight_ut() {
        let d = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert!((date_to_jd_midnight_ut(d) - (J2000_JD - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn non_finite_jd_rejected() {
        assert!(matches!(
            jd_to_local(f64::NAN, 0.0),
            Err(TimeError::OutOfRange(_))
        ));
    }

    #[test]
    fn offset_bounds() {
        assert!(validate_utc_offset(-12.0).is_ok());
        assert!(validate_utc_offset(14.0).is_ok());
        assert!(validate_utc_offset(5.75).is_ok());
        assert!(validate_utc_offset(14.5).is_err());
        assert!(validate_utc_offset(-12.25).is_err());
        assert!(validate_utc_offset(f64::NAN).is_err());
    }

    #[test]
    fn parse_clock_valid() {
        let t = parse_clock_time("09:05").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert_eq!(
            parse_clock_time("23:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
    }

    #[test]
    fn parse_clock_rejects_out_of_range() {
        assert!(parse_clock_time("24:00").is_err());
        assert!(parse_clock_time("12:60").is_err());
        assert!(parse_clock_time("1200").is_err());
        assert!(parse_clock_time("ab:cd").is_err());
    }

    #[test]
    fn parse_date_valid_and_invalid() {
        assert_eq!(
            parse_date("1990-02-28").unwrap(),
            NaiveDate::from_ymd_opt(1990, 2, 28).unwrap()
        );
        assert!(parse_date("1990-02-30").is_err());
        assert!(parse_date("28/02/1990").is_err());
    }
}
