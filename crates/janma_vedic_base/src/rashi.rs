//! Rashi (zodiac sign), sign modality, and whole-sign houses.
//!
//! Twelve signs of 30° each starting from Mesha (Aries) at 0° sidereal.

use crate::util::{degree_in_sign, sign_of};

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Sign modality, cycling movable → fixed → dual from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignMode {
    /// Chara: Mesha, Karka, Tula, Makara.
    Movable,
    /// Sthira: Vrishabha, Simha, Vrischika, Kumbha.
    Fixed,
    /// Dvisvabhava: Mithuna, Kanya, Dhanu, Meena.
    Dual,
}

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi from a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Rashi containing a sidereal longitude.
    pub fn from_longitude(lon: f64) -> Self {
        Self::from_index(sign_of(lon))
    }

    /// Modality of the sign (index mod 3).
    pub const fn mode(self) -> SignMode {
        match self.index() % 3 {
            0 => SignMode::Movable,
            1 => SignMode::Fixed,
            _ => SignMode::Dual,
        }
    }

    /// Odd signs (Mesha, Mithuna, ...) counted 1-based.
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }
}

/// Degrees-minutes-seconds of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

/// Decimal degrees to DMS (absolute value).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let rem_min = (d - degrees) * 60.0;
    let minutes = rem_min.floor();
    let seconds = (rem_min - minutes) * 60.0;
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds,
    }
}

/// Sign name and in-sign DMS for display, e.g. `Simha 14°00'00"`.
pub fn format_longitude(lon: f64) -> String {
    let rashi = Rashi::from_longitude(lon);
    let dms = deg_to_dms(degree_in_sign(lon));
    format!(
        "{} {:02}°{:02}'{:02.0}\"",
        rashi.name(),
        dms.degrees,
        dms.minutes,
        dms.seconds.floor()
    )
}

/// Whole-sign house (1-12) of a point: the lagna's sign is the first house.
pub fn house_from_lagna(point_lon: f64, lagna_lon: f64) -> u8 {
    (sign_of(point_lon) + 12 - sign_of(lagna_lon)) % 12 + 1
}

/// Sign index `n` places from `sign` (1-based: 1 = same sign, 5 = fifth).
pub fn nth_sign_from(sign: u8, n: u8) -> u8 {
    ((sign as u16 + n as u16 + 11) % 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
    }

    #[test]
    fn from_longitude_picks_sign() {
        assert_eq!(Rashi::from_longitude(134.0), Rashi::Simha);
        assert_eq!(Rashi::from_longitude(359.9), Rashi::Meena);
        assert_eq!(Rashi::from_longitude(360.0), Rashi::Mesha);
    }

    #[test]
    fn modes_cycle() {
        assert_eq!(Rashi::Mesha.mode(), SignMode::Movable);
        assert_eq!(Rashi::Vrishabha.mode(), SignMode::Fixed);
        assert_eq!(Rashi::Mithuna.mode(), SignMode::Dual);
        assert_eq!(Rashi::Makara.mode(), SignMode::Movable);
        assert_eq!(Rashi::Kumbha.mode(), SignMode::Fixed);
        assert_eq!(Rashi::Meena.mode(), SignMode::Dual);
    }

    #[test]
    fn parity() {
        assert!(Rashi::Mesha.is_odd());
        assert!(!Rashi::Vrishabha.is_odd());
        assert!(Rashi::Dhanu.is_odd());
    }

    #[test]
    fn dms_split() {
        let d = deg_to_dms(14.5125);
        assert_eq!(d.degrees, 14);
        assert_eq!(d.minutes, 30);
        assert!((d.seconds - 45.0).abs() < 1e-6);
    }

    #[test]
    fn format_in_sign() {
        assert_eq!(format_longitude(134.0), "Simha 14°00'00\"");
    }

    #[test]
    fn houses() {
        assert_eq!(house_from_lagna(100.0, 100.0), 1);
        assert_eq!(house_from_lagna(280.0, 100.0), 7);
        // same sign as a lagna at 100° is still the first house
        assert_eq!(house_from_lagna(91.0, 100.0), 1);
        assert_eq!(house_from_lagna(89.0, 100.0), 12);
        assert_eq!(house_from_lagna(5.0, 359.0), 2);
    }

    #[test]
    fn nth_sign() {
        assert_eq!(nth_sign_from(0, 1), 0);
        assert_eq!(nth_sign_from(0, 5), 4);
        assert_eq!(nth_sign_from(0, 9), 8);
        assert_eq!(nth_sign_from(11, 2), 0);
    }
}
