//! Analytic gateway against well-known sky positions.

use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use janma_ephem::{AnalyticEphemeris, AyanamshaSystem, EphemerisError, EphemerisGateway, GeoLocation};
use janma_time::{calendar_to_jd, local_to_jd};
use janma_vedic_base::{Graha, Rashi, angular_difference, normalize_360};

fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.2090).unwrap()
}

#[test]
fn ketu_opposes_rahu() {
    let eph = AnalyticEphemeris::default();
    for i in 0..20 {
        let g = eph.planet_longitudes(2_440_000.0 + i as f64 * 997.3).unwrap();
        let d = normalize_360(g.longitude(Graha::Ketu) - g.longitude(Graha::Rahu));
        assert_abs_diff_eq!(d, 180.0, epsilon = 1e-9);
    }
}

#[test]
fn sun_enters_sidereal_capricorn_mid_january() {
    // Makara sankranti (Lahiri) falls on 14/15 January
    let eph = AnalyticEphemeris::default();
    let before = eph.planet_longitudes(calendar_to_jd(2024, 1, 13.0)).unwrap();
    let after = eph.planet_longitudes(calendar_to_jd(2024, 1, 16.0)).unwrap();
    assert_eq!(Rashi::from_longitude(before.longitude(Graha::Surya)), Rashi::Dhanu);
    assert_eq!(Rashi::from_longitude(after.longitude(Graha::Surya)), Rashi::Makara);
}

#[test]
fn full_moon_opposes_sun() {
    // 2024-04-23 23:49 UT full moon
    let eph = AnalyticEphemeris::new(AyanamshaSystem::Lahiri);
    let g = eph.planet_longitudes(calendar_to_jd(2024, 4, 23.992)).unwrap();
    let elong = angular_difference(g.longitude(Graha::Chandra), g.longitude(Graha::Surya));
    assert!((elong - 180.0).abs() < 0.5, "elongation = {elong}");
}

#[test]
fn mercury_and_venus_stay_close_to_sun() {
    let eph = AnalyticEphemeris::default();
    for i in 0..40 {
        let g = eph.planet_longitudes(2_451_545.0 + i as f64 * 45.0).unwrap();
        let sun = g.longitude(Graha::Surya);
        assert!(angular_difference(g.longitude(Graha::Buddh), sun) < 29.0);
        assert!(angular_difference(g.longitude(Graha::Shukra), sun) < 48.0);
    }
}

#[test]
fn lagna_sweeps_the_zodiac_in_a_day() {
    let eph = AnalyticEphemeris::default();
    let loc = delhi();
    let start = local_to_jd(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        5.5,
    );
    let mut signs = std::collections::BTreeSet::new();
    for i in 0..144 {
        let asc = eph.ascendant_longitude(start + i as f64 / 144.0, &loc).unwrap();
        assert!((0.0..360.0).contains(&asc));
        signs.insert(Rashi::from_longitude(asc).index());
    }
    assert_eq!(signs.len(), 12);
}

#[test]
fn sun_rises_near_lagna() {
    // At sunrise the Sun sits on the eastern horizon, so the Lagna is close
    // to the Sun's own sidereal longitude.
    let eph = AnalyticEphemeris::default();
    let loc = delhi();
    let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    let (rise, _) = eph.sunrise_sunset(date, &loc, 5.5).unwrap();
    let jd = local_to_jd(rise, 5.5);
    let asc = eph.ascendant_longitude(jd, &loc).unwrap();
    let sun = eph.planet_longitudes(jd).unwrap().longitude(Graha::Surya);
    assert!(angular_difference(asc, sun) < 2.0, "asc {asc} sun {sun}");
}

#[test]
fn sunrise_before_sunset_on_the_same_local_day() {
    let eph = AnalyticEphemeris::default();
    let loc = delhi();
    for month in 1..=12 {
        let date = NaiveDate::from_ymd_opt(2024, month, 15).unwrap();
        let (rise, set) = eph.sunrise_sunset(date, &loc, 5.5).unwrap();
        assert!(rise < set);
        assert_eq!(rise.date(), date);
        assert_eq!(set.date(), date);
    }
}

#[test]
fn dateline_zones_rise_on_the_requested_date() {
    let eph = AnalyticEphemeris::default();
    let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    // Kiritimati (UTC+14), Apia (UTC+13), a UTC-12 point east of 172E
    let places = [(1.87, -157.4, 14.0), (-13.83, -171.76, 13.0), (0.0, 179.0, -12.0)];
    for (lat, lon, tz) in places {
        let loc = GeoLocation::new(lat, lon).unwrap();
        let (rise, set) = eph.sunrise_sunset(date, &loc, tz).unwrap();
        assert_eq!(rise.date(), date, "sunrise {rise} at {lon}/{tz}");
        assert_eq!(set.date(), date, "sunset {set} at {lon}/{tz}");
        let rise_hour = rise.time().format("%H").to_string();
        assert!(["05", "06", "07"].contains(&rise_hour.as_str()), "sunrise {rise}");
    }
}

#[test]
fn polar_night_is_an_error() {
    let eph = AnalyticEphemeris::default();
    let loc = GeoLocation::new(-80.0, 0.0).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    assert_eq!(
        eph.sunrise_sunset(date, &loc, 0.0),
        Err(EphemerisError::NeverRises(date))
    );
}

#[test]
fn gateway_usable_through_reference() {
    fn sun_of(g: impl EphemerisGateway) -> f64 {
        g.planet_longitudes(2_451_545.0).unwrap().longitude(Graha::Surya)
    }
    let eph = AnalyticEphemeris::default();
    assert_abs_diff_eq!(sun_of(&eph), sun_of(eph), epsilon = 0.0);
}
