//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    d.min(360.0 - d)
}

/// 0-based sign index (0 = Mesha .. 11 = Meena) of a longitude.
pub fn sign_of(lon: f64) -> u8 {
    ((normalize_360(lon) / 30.0).floor() as u8).min(11)
}

/// Degrees within the sign, [0, 30).
pub fn degree_in_sign(lon: f64) -> f64 {
    normalize_360(lon) % 30.0
}
