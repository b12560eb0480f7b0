//! Nisheka (conception) lagna and gestation plausibility (BPHS 4.12-4.16).

use crate::util::{normalize_360, sign_of};

/// Lower bound of a plausible gestation, in sign-months.
pub const PLAUSIBLE_MIN_MONTHS: f64 = 5.0;
/// Upper bound of a plausible gestation.
pub const PLAUSIBLE_MAX_MONTHS: f64 = 10.5;
/// Lower bound of the half-credit band.
pub const NEAR_MIN_MONTHS: f64 = 4.0;
/// Upper bound of the half-credit band.
pub const NEAR_MAX_MONTHS: f64 = 11.0;

/// Estimated conception lagna and gestation check.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NishekaResult {
    pub conception_longitude: f64,
    /// Gestation in sign-months, 1-12.
    pub gestation_months: f64,
    pub plausible: bool,
    /// 100, 50 or 0.
    pub plausibility_score: f64,
}

/// Saturn-to-Gulika sign difference plus the lagna-to-9th difference.
///
/// The second term is `(lagna - (lagna + 8) mod 12) mod 12`, which is 4 for
/// every lagna. It is kept as written in the verse.
pub fn gestation_signs(saturn_lon: f64, gulika_lon: f64, lagna_lon: f64) -> u8 {
    let saturn = i32::from(sign_of(saturn_lon));
    let gulika = i32::from(sign_of(gulika_lon));
    let lagna = i32::from(sign_of(lagna_lon));
    let diff_a = (saturn - gulika).rem_euclid(12);
    let ninth = (lagna + 8).rem_euclid(12);
    let diff_b = (lagna - ninth).rem_euclid(12);
    match (diff_a + diff_b).rem_euclid(12) {
        0 => 12,
        n => n as u8,
    }
}

/// Plausibility score for a gestation length in months.
pub fn plausibility_score(months: f64) -> f64 {
    if (PLAUSIBLE_MIN_MONTHS..=PLAUSIBLE_MAX_MONTHS).contains(&months) {
        100.0
    } else if (NEAR_MIN_MONTHS..=NEAR_MAX_MONTHS).contains(&months) {
        50.0
    } else {
        0.0
    }
}

/// Nisheka lagna from Saturn, the time-of-day Gulika and the birth lagna.
pub fn nisheka(saturn_lon: f64, gulika_lon: f64, lagna_lon: f64) -> NishekaResult {
    let signs = gestation_signs(saturn_lon, gulika_lon, lagna_lon);
    let months = f64::from(signs);
    NishekaResult {
        conception_longitude: normalize_360(lagna_lon - months * 30.0),
        gestation_months: months,
        plausible: (PLAUSIBLE_MIN_MONTHS..=PLAUSIBLE_MAX_MONTHS).contains(&months),
        plausibility_score: plausibility_score(months),
    }
}
