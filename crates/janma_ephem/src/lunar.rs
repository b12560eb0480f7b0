//! Truncated lunar theory: the largest periodic terms in longitude.
//!
//! Terms of 0.0007° and larger plus the Venus/Jupiter additive corrections keep
//! the error near 0.01°, ample for nakshatra and Vimshottari balance work.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47,
//! Table 47.A.

use janma_vedic_base::normalize_360;

/// Multiples of (D, M, M', F) and the sine amplitude in 1e-6 degrees.
const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 43] = [
    (0, 0, 1, 0, 6_288_774.0),
    (2, 0, -1, 0, 1_274_027.0),
    (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0),
    (0, 1, 0, 0, -185_116.0),
    (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0),
    (2, -1, -1, 0, 57_066.0),
    (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0),
    (0, 1, -1, 0, -40_923.0),
    (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0),
    (2, 0, 0, -2, 15_327.0),
    (0, 0, 1, 2, -12_528.0),
    (0, 0, 1, -2, 10_980.0),
    (4, 0, -1, 0, 10_675.0),
    (0, 0, 3, 0, 10_034.0),
    (4, 0, -2, 0, 8_548.0),
    (2, 1, -1, 0, -7_888.0),
    (2, 1, 0, 0, -6_766.0),
    (1, 0, -1, 0, -5_163.0),
    (1, 1, 0, 0, 4_987.0),
    (2, -1, 1, 0, 4_036.0),
    (2, 0, 2, 0, 3_994.0),
    (4, 0, 0, 0, 3_861.0),
    (2, 0, -3, 0, 3_665.0),
    (0, 1, -2, 0, -2_689.0),
    (2, 0, -1, 2, -2_602.0),
    (2, -1, -2, 0, 2_390.0),
    (1, 0, 1, 0, -2_348.0),
    (2, -2, 0, 0, 2_236.0),
    (0, 1, 2, 0, -2_120.0),
    (0, 2, 0, 0, -2_069.0),
    (2, -2, -1, 0, 2_048.0),
    (2, 0, 1, -2, -1_773.0),
    (2, 0, 0, 2, -1_595.0),
    (4, -1, -1, 0, 1_215.0),
    (0, 0, 2, 2, -1_110.0),
    (3, 0, -1, 0, -892.0),
    (2, 1, 1, 0, -810.0),
    (4, -1, -2, 0, 759.0),
    (0, 2, -1, 0, -713.0),
];

/// Fundamental lunar arguments at `t` Julian centuries since J2000.0, degrees.
#[derive(Debug, Clone, Copy)]
struct LunarArguments {
    /// Mean longitude L'.
    mean_longitude: f64,
    /// Mean elongation D.
    elongation: f64,
    /// Sun's mean anomaly M.
    sun_anomaly: f64,
    /// Moon's mean anomaly M'.
    moon_anomaly: f64,
    /// Argument of latitude F.
    latitude_argument: f64,
}

impl LunarArguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        Self {
            mean_longitude: 218.3164477 + 481_267.88123421 * t - 0.0015786 * t2,
            elongation: 297.8501921 + 445_267.1114034 * t - 0.0018819 * t2,
            sun_anomaly: 357.5291092 + 35_999.0502909 * t - 0.0001536 * t2,
            moon_anomaly: 134.9633964 + 477_198.8675055 * t + 0.0087414 * t2,
            latitude_argument: 93.2720950 + 483_202.0175233 * t - 0.0036539 * t2,
        }
    }
}

/// Geocentric ecliptic longitude of the Moon, tropical of date, degrees [0, 360).
pub fn moon_longitude_deg(t: f64) -> f64 {
    let args = LunarArguments::at(t);
    // Earth's orbital eccentricity decreases the M terms
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();

    let sum: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(cd, cm, cmp, cf, amp)| {
            let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
            let scale = match cm.abs() {
                0 => 1.0,
                1 => e,
                _ => e * e,
            };
            amp * scale * arg.sin()
        })
        .sum();

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let additive = 3958.0 * a1.sin()
        + 1962.0 * (args.mean_longitude - args.latitude_argument).to_radians().sin()
        + 318.0 * a2.sin();

    normalize_360(args.mean_longitude + (sum + additive) * 1e-6)
}
