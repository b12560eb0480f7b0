//! Nakshatra (lunar mansion) division of the zodiac.

use crate::util::normalize_360;

/// Span of one nakshatra in the 27-fold scheme: 13°20'.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Names of the 27 nakshatras, Ashwini first.
pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// Position of a longitude in the 27-nakshatra scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    /// 0-based index (0 = Ashwini .. 26 = Revati).
    pub index: u8,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fraction: f64,
}

impl NakshatraPosition {
    pub fn name(&self) -> &'static str {
        NAKSHATRA_NAMES[self.index as usize]
    }
}

/// Nakshatra containing a sidereal longitude.
pub fn nakshatra_from_longitude(lon: f64) -> NakshatraPosition {
    let lon = normalize_360(lon);
    let index = ((lon / NAKSHATRA_SPAN_27).floor() as u8) % 27;
    let fraction = (lon - index as f64 * NAKSHATRA_SPAN_27) / NAKSHATRA_SPAN_27;
    NakshatraPosition {
        index,
        fraction: fraction.clamp(0.0, 1.0 - f64::EPSILON),
    }
}
