//! Birth balance of the first mahadasha.

use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::normalize_360;

/// Nakshatra birth balance.
///
/// Returns `(nakshatra_index, balance, elapsed_fraction)` where `balance` is
/// `entry_period * (1 - elapsed_fraction)` in the unit of `entry_period`.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let position_in_nak = lon - f64::from(nak_idx) * NAKSHATRA_SPAN_27;
    let elapsed_fraction = position_in_nak / NAKSHATRA_SPAN_27;
    let balance = entry_period * (1.0 - elapsed_fraction);
    (nak_idx, balance, elapsed_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_balance_at_start() {
        let (idx, balance, frac) = nakshatra_birth_balance(0.0, 7.0);
        assert_eq!(idx, 0);
        assert!((balance - 7.0).abs() < 1e-12);
        assert!(frac.abs() < 1e-12);
    }

    #[test]
    fn small_balance_near_end() {
        let (idx, balance, _) = nakshatra_birth_balance(NAKSHATRA_SPAN_27 - 0.001, 7.0);
        assert_eq!(idx, 0);
        assert!(balance < 0.001);
    }

    #[test]
    fn last_nakshatra() {
        let (idx, _, frac) = nakshatra_birth_balance(359.999, 17.0);
        assert_eq!(idx, 26);
        assert!(frac > 0.99);
    }
}
