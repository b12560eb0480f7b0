//! Special lagnas from ishta-kala (BPHS 4.18-4.28).
//!
//! Bhava, Hora and Ghati lagnas advance from the Sun at fixed rates of
//! ghatis per sign. Varnada combines the birth lagna with the Hora lagna.

use janma_time::IshtaKala;

use crate::util::{normalize_360, sign_of};

/// Ghatis per sign of Bhava lagna motion.
pub const BHAVA_GHATIS_PER_SIGN: f64 = 5.0;

/// Ghatis per sign of Hora lagna motion.
pub const HORA_GHATIS_PER_SIGN: f64 = 2.5;

/// The four special lagnas, sidereal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialLagnaSet {
    pub bhava: f64,
    pub hora: f64,
    pub ghati: f64,
    pub varnada: f64,
}

/// Bhava lagna: one sign per 5 whole ghatis from the Sun.
pub fn bhava_lagna(ghatis: u32, sun_lon: f64) -> f64 {
    normalize_360(sun_lon + f64::from(ghatis) / BHAVA_GHATIS_PER_SIGN * 30.0)
}

/// Hora lagna: one sign per 2.5 whole ghatis from the Sun.
pub fn hora_lagna(ghatis: u32, sun_lon: f64) -> f64 {
    normalize_360(sun_lon + f64::from(ghatis) / HORA_GHATIS_PER_SIGN * 30.0)
}

/// Ghati lagna: one sign per ghati and 2° per pala from the Sun.
pub fn ghati_lagna(ghatis: u32, palas: u32, sun_lon: f64) -> f64 {
    normalize_360(sun_lon + f64::from(ghatis) * 30.0 + f64::from(palas) * 2.0)
}

/// Varnada sign number (1-12) from 1-based lagna and hora-lagna sign numbers.
pub fn varnada_sign_number(lagna_num: u8, hora_num: u8) -> u8 {
    let (j, h) = (i32::from(lagna_num), i32::from(hora_num));
    let mut n = if j % 2 == h % 2 {
        let mut sum = j + h;
        if sum > 12 {
            sum %= 12;
            if sum == 0 {
                sum = 12;
            }
        }
        sum
    } else {
        let h_adj = if h % 2 == 0 { 13 - h } else { h };
        (j - h_adj).abs().max(1)
    };
    if n % 2 == 0 {
        n = 12 - n;
        if n == 0 {
            n = 1;
        }
    }
    n as u8
}

/// Varnada lagna longitude from the birth lagna and the Hora lagna.
pub fn varnada_lagna(lagna_lon: f64, hora_lon: f64) -> f64 {
    let n = varnada_sign_number(sign_of(lagna_lon) + 1, sign_of(hora_lon) + 1);
    normalize_360(f64::from(n - 1) * 30.0)
}

/// All four special lagnas for one moment.
pub fn special_lagnas(ishta: &IshtaKala, sun_lon: f64, lagna_lon: f64) -> SpecialLagnaSet {
    let hora = hora_lagna(ishta.ghatis, sun_lon);
    SpecialLagnaSet {
        bhava: bhava_lagna(ishta.ghatis, sun_lon),
        hora,
        ghati: ghati_lagna(ishta.ghatis, ishta.palas, sun_lon),
        varnada: varnada_lagna(lagna_lon, hora),
    }
}
