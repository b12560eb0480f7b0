//! Vimshottari configuration data and the birth summary.

use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;

use super::balance::nakshatra_birth_balance;

/// Mean year used for dasha arithmetic, in days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha lengths in years, aligned with `VIMSHOTTARI_GRAHAS`.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the full cycle.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Mahadasha length of a graha in years.
pub fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_GRAHAS
        .iter()
        .position(|&g| g == graha)
        .map_or(0.0, |i| VIMSHOTTARI_YEARS[i])
}

/// Lord of a nakshatra (0-26); the 9-graha cycle repeats three times.
pub const fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_GRAHAS[(nakshatra_index % 27 % 9) as usize]
}

/// Where the dasha sequence starts for a given natal Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VimshottariBirth {
    /// Moon's nakshatra, 0-26.
    pub nakshatra_index: u8,
    /// Lord of that nakshatra and of the first mahadasha.
    pub lord: Graha,
    /// Years left in the first mahadasha at birth.
    pub remaining_years: f64,
    /// Position of `lord` in `VIMSHOTTARI_GRAHAS`.
    pub start_index: u8,
}

/// Birth summary from the Moon's sidereal longitude.
pub fn vimshottari_birth(moon_lon: f64) -> VimshottariBirth {
    let nak = nakshatra_from_longitude(moon_lon);
    let start_index = nak.index % 9;
    let (_, remaining_years, _) =
        nakshatra_birth_balance(moon_lon, VIMSHOTTARI_YEARS[start_index as usize]);
    VimshottariBirth {
        nakshatra_index: nak.index,
        lord: nakshatra_lord(nak.index),
        remaining_years,
        start_index,
    }
}
