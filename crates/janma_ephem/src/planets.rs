//! Heliocentric Keplerian orbits for the five visible planets and the
//! Earth-Moon barycentre, reduced to geocentric ecliptic longitude.
//!
//! Sources: E.M. Standish, "Keplerian Elements for Approximate Positions of
//! the Major Planets" (JPL, Table 1, valid 1800–2050 AD).

use std::f64::consts::TAU;

use janma_vedic_base::normalize_360;

/// Maximum Newton iterations for Kepler's equation.
const MAX_KEPLER_ITERATIONS: usize = 30;

/// Convergence threshold for the eccentric anomaly, radians.
const KEPLER_TOLERANCE: f64 = 1.0e-12;

/// Bodies with tabulated mean elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitBody {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
}

/// Mean orbital elements at J2000.0 and their rates per Julian century.
///
/// Order: a (au), e, I (°), L (°), ϖ (°), Ω (°).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    pub at_epoch: [f64; 6],
    pub per_century: [f64; 6],
}

impl OrbitBody {
    /// Mean elements for this body.
    pub const fn elements(self) -> MeanElements {
        match self {
            Self::Mercury => MeanElements {
                at_epoch: [
                    0.38709927,
                    0.20563593,
                    7.00497902,
                    252.25032350,
                    77.45779628,
                    48.33076593,
                ],
                per_century: [
                    0.00000037,
                    0.00001906,
                    -0.00594749,
                    149_472.67411175,
                    0.16047689,
                    -0.12534081,
                ],
            },
            Self::Venus => MeanElements {
                at_epoch: [
                    0.72333566,
                    0.00677672,
                    3.39467605,
                    181.97909950,
                    131.60246718,
                    76.67984255,
                ],
                per_century: [
                    0.00000390,
                    -0.00004107,
                    -0.00078890,
                    58_517.81538729,
                    0.00268329,
                    -0.27769418,
                ],
            },
            Self::EarthMoonBarycenter => MeanElements {
                at_epoch: [
                    1.00000261,
                    0.01671123,
                    -0.00001531,
                    100.46457166,
                    102.93768193,
                    0.0,
                ],
                per_century: [
                    0.00000562,
                    -0.00004392,
                    -0.01294668,
                    35_999.37244981,
                    0.32327364,
                    0.0,
                ],
            },
            Self::Mars => MeanElements {
                at_epoch: [
                    1.52371034,
                    0.09339410,
                    1.84969142,
                    -4.55343205,
                    -23.94362959,
                    49.55953891,
                ],
                per_century: [
                    0.00001847,
                    0.00007882,
                    -0.00813131,
                    19_140.30268499,
                    0.44441088,
                    -0.29257343,
                ],
            },
            Self::Jupiter => MeanElements {
                at_epoch: [
                    5.20288700,
                    0.04838624,
                    1.30439695,
                    34.39644051,
                    14.72847983,
                    100.47390909,
                ],
                per_century: [
                    -0.00011607,
                    -0.00013253,
                    -0.00183714,
                    3_034.74612775,
                    0.21252668,
                    0.20469106,
                ],
            },
            Self::Saturn => MeanElements {
                at_epoch: [
                    9.53667594,
                    0.05386179,
                    2.48599187,
                    49.95424423,
                    92.59887831,
                    113.66242448,
                ],
                per_century: [
                    -0.00125060,
                    -0.00050991,
                    0.00193609,
                    1_222.49362201,
                    -0.41897216,
                    -0.28867794,
                ],
            },
        }
    }
}

/// Solve Kepler's equation `E - e sin E = M` by Newton iteration (radians).
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly.rem_euclid(TAU);
    let mut ecc = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..MAX_KEPLER_ITERATIONS {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ecc
}

/// Heliocentric ecliptic position (J2000 ecliptic and equinox), au.
pub fn heliocentric_position(body: OrbitBody, t: f64) -> [f64; 3] {
    let el = body.elements();
    let [a, e, inc, l, peri, node] =
        std::array::from_fn(|i| el.at_epoch[i] + el.per_century[i] * t);

    let omega = (peri - node).to_radians();
    let mean_anomaly = (l - peri).to_radians();
    let ecc = solve_kepler(mean_anomaly, e);

    // position in the orbital plane, x towards perihelion
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.to_radians().sin_cos();
    let (si, ci) = inc.to_radians().sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Geocentric ecliptic longitude (J2000 equinox), degrees [0, 360).
///
/// The Earth-Moon barycentre stands in for the Earth; the offset is under
/// 5000 km and shifts no planet by more than a few arcseconds.
pub fn geocentric_longitude_j2000_deg(body: OrbitBody, t: f64) -> f64 {
    let p = heliocentric_position(body, t);
    let earth = heliocentric_position(OrbitBody::EarthMoonBarycenter, t);
    let dx = p[0] - earth[0];
    let dy = p[1] - earth[1];
    normalize_360(dy.atan2(dx).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use janma_time::jd_to_centuries;

    #[test]
    fn kepler_circular_is_identity() {
        assert!((solve_kepler(1.234, 0.0) - 1.234).abs() < 1e-12);
    }

    #[test]
    fn kepler_satisfies_equation() {
        for &e in &[0.0167, 0.2056, 0.5, 0.9] {
            for i in 0..12 {
                let m = i as f64 * 0.5;
                let ecc = solve_kepler(m, e);
                let resid = ecc - e * ecc.sin() - m.rem_euclid(TAU);
                assert!(resid.abs() < 1e-10, "e={e} m={m} resid={resid}");
            }
        }
    }

    #[test]
    fn earth_at_one_au() {
        let p = heliocentric_position(OrbitBody::EarthMoonBarycenter, 0.0);
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 0.9833).abs() < 0.001, "r = {r}");
    }

    #[test]
    fn sun_opposite_earth() {
        // Geocentric Sun = -EMB; J2000 longitude ≈ 280.37° on 2000-01-01 12h
        let e = heliocentric_position(OrbitBody::EarthMoonBarycenter, 0.0);
        let sun = normalize_360((-e[1]).atan2(-e[0]).to_degrees());
        assert!((sun - 280.37).abs() < 0.05, "sun = {sun}");
    }

    #[test]
    fn jupiter_2000_in_aries() {
        // Jupiter was near tropical 25° Aries in January 2000.
        let lon = geocentric_longitude_j2000_deg(OrbitBody::Jupiter, 0.0);
        assert!((lon - 25.2).abs() < 1.0, "lon = {lon}");
    }

    #[test]
    fn saturn_2000_in_taurus() {
        // Saturn was near tropical 10.5° Taurus in January 2000.
        let lon = geocentric_longitude_j2000_deg(OrbitBody::Saturn, 0.0);
        assert!((lon - 40.4).abs() < 1.0, "lon = {lon}");
    }

    #[test]
    fn venus_stays_near_sun() {
        for day in (0..730).step_by(30) {
            let t = jd_to_centuries(2_451_545.0 + day as f64);
            let e = heliocentric_position(OrbitBody::EarthMoonBarycenter, t);
            let sun = normalize_360((-e[1]).atan2(-e[0]).to_degrees());
            let venus = geocentric_longitude_j2000_deg(OrbitBody::Venus, t);
            let elong = janma_vedic_base::angular_difference(venus, sun);
            assert!(elong < 48.0, "day {day}: elongation {elong}");
        }
    }
}
