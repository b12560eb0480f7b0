//! Pranapada: the sensitive point derived from ishta-kala (BPHS 4.5-4.7).
//!
//! Two variants:
//! - Madhya (coarse): whole ghatis and palas only.
//! - Sphuta (refined): total palas, anchored on the Sun's sign by modality.
//!   This is the point used by the rectification filter.

use crate::rashi::{Rashi, SignMode};
use crate::util::{normalize_360, sign_of};

/// Palas per sign of Pranapada motion.
pub const PALAS_PER_SIGN: f64 = 15.0;

/// Madhya Pranapada longitude from whole ghatis and palas.
///
/// sign = (4·ghatis + palas div 15) mod 12, degree = (palas mod 15)·2.
pub fn madhya_pranapada(ghatis: u32, palas: u32) -> f64 {
    let sign = (u64::from(ghatis) * 4 + u64::from(palas / 15)) % 12;
    let degree = f64::from(palas % 15) * 2.0;
    normalize_360(sign as f64 * 30.0 + degree)
}

/// Base sign for sphuta Pranapada: the Sun's own sign if movable, the 9th
/// from it if fixed, the 5th from it if dual.
pub fn sphuta_base_sign(sun_lon: f64) -> u8 {
    let sun_sign = sign_of(sun_lon);
    match Rashi::from_index(sun_sign).mode() {
        SignMode::Movable => sun_sign,
        SignMode::Fixed => (sun_sign + 8) % 12,
        SignMode::Dual => (sun_sign + 4) % 12,
    }
}

/// Sphuta Pranapada longitude from total palas since sunrise and the Sun.
pub fn sphuta_pranapada(total_palas: f64, sun_lon: f64) -> f64 {
    let offset = total_palas / PALAS_PER_SIGN;
    let whole = offset.floor();
    let fraction = offset - whole;
    let sign = (u64::from(sphuta_base_sign(sun_lon)) + whole as u64) % 12;
    normalize_360(sign as f64 * 30.0 + fraction * 30.0)
}
