//! The nine grahas, sign lordship, and a sidereal position set.

use crate::rashi::Rashi;
use crate::util::normalize_360;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Weekday lords, Sunday first. Index = weekday (0 = Sunday).
pub const WEEKDAY_LORDS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Sign lords indexed by rashi (0 = Mesha).
const SIGN_LORDS: [Graha; 12] = [
    Graha::Mangal,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Surya,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Shani,
    Graha::Guru,
];

impl Graha {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Planetary lord of a rashi.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    SIGN_LORDS[rashi.index() as usize]
}

/// Lord of a sign given by 0-based index (wraps modulo 12).
pub const fn sign_lord(sign_index: u8) -> Graha {
    SIGN_LORDS[(sign_index % 12) as usize]
}

/// Sidereal longitudes of all nine grahas, indexed by `Graha::index()`.
///
/// Ketu is always Rahu + 180°; it is derived here and never queried.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrahaLongitudes {
    pub longitudes: [f64; 9],
}

impl GrahaLongitudes {
    /// Build from the eight independently computed bodies, in
    /// `[Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu]` order.
    pub fn from_eight(lons: [f64; 8]) -> Self {
        let mut longitudes = [0.0; 9];
        for (slot, lon) in longitudes.iter_mut().zip(lons) {
            *slot = normalize_360(lon);
        }
        longitudes[Graha::Ketu.index() as usize] = normalize_360(lons[7] + 180.0);
        Self { longitudes }
    }

    /// Sidereal longitude of one graha.
    pub fn longitude(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index() as usize]
    }

    /// 0-based rashi index (0-11) of one graha.
    pub fn rashi_index(&self, graha: Graha) -> u8 {
        crate::util::sign_of(self.longitude(graha))
    }

    /// Iterate `(graha, longitude)` pairs in traditional order.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, f64)> + '_ {
        ALL_GRAHAS.iter().map(|&g| (g, self.longitude(g)))
    }
}
