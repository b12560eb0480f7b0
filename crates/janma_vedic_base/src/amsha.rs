//! Divisional (varga) charts by uniform harmonic subdivision.
//!
//! Each 30° sign is cut into D equal segments. Segment `k` of sign `s` maps
//! to sign `(s·D + k) mod 12`, and the offset inside the segment is
//! stretched by D to give the degree in the new sign.

use crate::error::VedicError;
use crate::graha::GrahaLongitudes;
use crate::util::{degree_in_sign, normalize_360, sign_of};

/// Drekkana: siblings, courage.
pub const D3: u16 = 3;
/// Saptamsha: children.
pub const D7: u16 = 7;
/// Navamsha: marriage, spouse.
pub const D9: u16 = 9;
/// Dashamsha: career.
pub const D10: u16 = 10;
/// Dwadashamsha: parents.
pub const D12: u16 = 12;
/// Shashtiamsha: fine analysis.
pub const D60: u16 = 60;

/// Longitude in the D-`division` chart.
pub fn divisional_longitude(lon: f64, division: u16) -> Result<f64, VedicError> {
    if division == 0 {
        return Err(VedicError::InvalidDivision(division));
    }
    let d = f64::from(division);
    let sign = u32::from(sign_of(lon));
    let deg = degree_in_sign(lon);
    let size = 30.0 / d;
    let segment = ((deg / size).floor() as u32).min(u32::from(division) - 1);
    let new_sign = (sign * u32::from(division) + segment) % 12;
    let new_deg = (deg % size) * d;
    Ok(normalize_360(f64::from(new_sign) * 30.0 + new_deg))
}

/// Lagna and grahas of one divisional chart.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DivisionalChart {
    pub division: u16,
    pub lagna: f64,
    pub grahas: GrahaLongitudes,
}

impl DivisionalChart {
    /// 0-based sign of the divisional lagna.
    pub fn lagna_sign(&self) -> u8 {
        sign_of(self.lagna)
    }
}

/// Map the lagna and every graha into the D-`division` chart.
pub fn divisional_chart(
    lagna: f64,
    grahas: &GrahaLongitudes,
    division: u16,
) -> Result<DivisionalChart, VedicError> {
    let lagna = divisional_longitude(lagna, division)?;
    let mut longitudes = grahas.longitudes;
    for lon in &mut longitudes {
        *lon = divisional_longitude(*lon, division)?;
    }
    Ok(DivisionalChart {
        division,
        lagna,
        grahas: GrahaLongitudes { longitudes },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d1_is_identity() {
        for lon in [0.0, 12.5, 134.0, 359.5] {
            assert!((divisional_longitude(lon, 1).unwrap() - lon).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_division_rejected() {
        assert_eq!(
            divisional_longitude(10.0, 0),
            Err(VedicError::InvalidDivision(0))
        );
    }

    #[test]
    fn navamsha_of_mesha_start() {
        // Mesha 0°-3°20' → Mesha navamsha
        assert!((divisional_longitude(1.0, D9).unwrap() - 9.0).abs() < 1e-9);
        // Mesha 3°20'-6°40' → Vrishabha
        let lon = divisional_longitude(5.0, D9).unwrap();
        assert_eq!(sign_of(lon), 1);
    }

    #[test]
    fn navamsha_of_vrishabha_start() {
        // Vrishabha (sign 1) first segment: (1·9 + 0) mod 12 = 9 → Makara
        let lon = divisional_longitude(30.5, D9).unwrap();
        assert_eq!(sign_of(lon), 9);
        assert!((lon - (270.0 + 4.5)).abs() < 1e-9);
    }

    #[test]
    fn dashamsha_segment_degree_stretch() {
        // Simha 14°: size 3°, segment 4, offset 2° → 20°; sign (4·10 + 4) mod 12 = 8
        let lon = divisional_longitude(134.0, D10).unwrap();
        assert!((lon - (240.0 + 20.0)).abs() < 1e-9);
    }

    #[test]
    fn chart_maps_lagna_and_grahas() {
        let g = GrahaLongitudes::from_eight([10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0]);
        let chart = divisional_chart(134.0, &g, D7).unwrap();
        assert_eq!(chart.division, 7);
        assert!((chart.lagna - divisional_longitude(134.0, D7).unwrap()).abs() < 1e-12);
        for (graha, lon) in g.iter() {
            let expected = divisional_longitude(lon, D7).unwrap();
            assert!((chart.grahas.longitude(graha) - expected).abs() < 1e-12);
        }
    }
}
