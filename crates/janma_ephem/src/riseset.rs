//! Sunrise and sunset for the centre of the solar disc.
//!
//! Iterative hour-angle method: start from the meridian transit near local
//! noon, offset by the hour angle at which the Sun's centre reaches the
//! refracted horizon, then refine with the Sun's position at the event.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 15;
//! Montenbruck & Pfleger, "Astronomy on the Personal Computer".

use std::f64::consts::{PI, TAU};

use chrono::NaiveDate;
use janma_time::{SIDEREAL_RATE, date_to_jd_midnight_ut, jd_to_centuries, local_sidereal_deg};

use crate::error::{EphemerisError, finite};
use crate::gateway::GeoLocation;
use crate::solar::sun_position;

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Altitude of the Sun's centre at rise/set: standard refraction only.
pub const SUN_CENTRE_ALTITUDE_DEG: f64 = -34.0 / 60.0;

/// Approximate solar noon JD(UT) on the civil day that starts at local
/// midnight `jd_local_midnight`.
///
/// The gap between zone time and mean solar time is wrapped to ±12 hours so
/// that dateline zones (UTC+13/+14, UTC-12) keep noon on the requested date.
pub fn approximate_local_noon_jd(
    jd_local_midnight: f64,
    longitude_deg: f64,
    utc_offset_hours: f64,
) -> f64 {
    let zone_gap_deg =
        (utc_offset_hours * 15.0 - longitude_deg + 180.0).rem_euclid(360.0) - 180.0;
    jd_local_midnight + 0.5 + zone_gap_deg / 360.0
}

/// Wrap an angle in radians to [-pi, pi].
fn wrap_pi(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r > PI { r - TAU } else { r }
}

/// Sun's hour angle (radians) and declination (radians) at `jd_ut`.
fn sun_hour_angle_dec(jd_ut: f64, location: &GeoLocation) -> (f64, f64) {
    let sun = sun_position(jd_to_centuries(jd_ut));
    let lst = local_sidereal_deg(jd_ut, location.longitude_deg);
    (wrap_pi((lst - sun.ra_deg).to_radians()), sun.dec_deg.to_radians())
}

/// Hour angle (radians, positive) at which the Sun's centre crosses the
/// horizon, or a polar error.
fn horizon_hour_angle(
    phi: f64,
    dec: f64,
    date: NaiveDate,
) -> Result<f64, EphemerisError> {
    let h0 = SUN_CENTRE_ALTITUDE_DEG.to_radians();
    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h > 1.0 {
        return Err(EphemerisError::NeverRises(date));
    }
    if cos_h < -1.0 {
        return Err(EphemerisError::NeverSets(date));
    }
    Ok(cos_h.acos())
}

fn compute_event(
    location: &GeoLocation,
    date: NaiveDate,
    jd_noon: f64,
    rising: bool,
) -> Result<f64, EphemerisError> {
    let phi = location.latitude_deg.to_radians();
    let rate = TAU * SIDEREAL_RATE;

    let (ha_noon, dec_noon) = sun_hour_angle_dec(jd_noon, location);
    let transit = jd_noon - ha_noon / rate;
    let h0 = horizon_hour_angle(phi, dec_noon, date)?;

    let mut jd = if rising {
        transit - h0 / rate
    } else {
        transit + h0 / rate
    };

    for _ in 0..MAX_ITERATIONS {
        let (ha_actual, dec) = sun_hour_angle_dec(jd, location);
        let h = horizon_hour_angle(phi, dec, date)?;
        let ha_target = if rising { -h } else { h };
        let correction = wrap_pi(ha_target - ha_actual) / rate;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    finite(jd, if rising { "sunrise" } else { "sunset" })
}

/// Sunrise and sunset (JD UT) on a local civil date at a location.
pub fn sunrise_sunset_jd(
    date: NaiveDate,
    location: &GeoLocation,
    utc_offset_hours: f64,
) -> Result<(f64, f64), EphemerisError> {
    let local_midnight = date_to_jd_midnight_ut(date) - utc_offset_hours / 24.0;
    let noon = approximate_local_noon_jd(local_midnight, location.longitude_deg, utc_offset_hours);
    let rise = compute_event(location, date, noon, true)?;
    let set = compute_event(location, date, noon, false)?;
    Ok((rise, set))
}
