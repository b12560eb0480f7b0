//! Physical-trait scoring from the lagna (BPHS 2.3-2.23).
//!
//! Each declared trait yields 0, 50 or 100. Undeclared traits are not
//! scored and do not enter the overall mean.

use std::str::FromStr;

use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha, GrahaLongitudes, sign_lord};
use crate::util::{degree_in_sign, sign_of};

/// Orb, in degrees within the sign, for a graha to count as "in the lagna".
pub const IN_LAGNA_ORB_DEG: f64 = 5.0;

/// Declared stature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Height {
    Tall,
    Medium,
    Short,
}

/// Declared body build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Build {
    Athletic,
    Slim,
    Heavy,
}

/// Declared complexion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Complexion {
    Fair,
    Wheatish,
    Dark,
}

impl Height {
    /// Lagna signs (0-based) for this stature.
    pub const fn signs(self) -> &'static [u8] {
        match self {
            Self::Tall => &[0, 1, 4, 9],
            Self::Medium => &[2, 5, 6, 10, 11],
            Self::Short => &[3, 7],
        }
    }
}

impl Build {
    /// Grahas whose lordship of, or presence in, the lagna shows this build.
    pub const fn grahas(self) -> &'static [Graha] {
        match self {
            Self::Athletic => &[Graha::Mangal, Graha::Guru],
            Self::Slim => &[Graha::Buddh, Graha::Shukra],
            Self::Heavy => &[Graha::Shani],
        }
    }
}

impl Complexion {
    /// Grahas whose presence in the lagna shows this complexion.
    pub const fn grahas(self) -> &'static [Graha] {
        match self {
            Self::Fair => &[Graha::Chandra],
            Self::Wheatish => &[Graha::Guru, Graha::Shukra],
            Self::Dark => &[Graha::Surya, Graha::Mangal, Graha::Buddh, Graha::Shani],
        }
    }
}

impl FromStr for Height {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TALL" => Ok(Self::Tall),
            "MEDIUM" => Ok(Self::Medium),
            "SHORT" => Ok(Self::Short),
            _ => Err(VedicError::UnknownTrait(s.to_string())),
        }
    }
}

impl FromStr for Build {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ATHLETIC" => Ok(Self::Athletic),
            "SLIM" => Ok(Self::Slim),
            "HEAVY" => Ok(Self::Heavy),
            _ => Err(VedicError::UnknownTrait(s.to_string())),
        }
    }
}

impl FromStr for Complexion {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FAIR" => Ok(Self::Fair),
            "WHEATISH" => Ok(Self::Wheatish),
            "DARK" => Ok(Self::Dark),
            _ => Err(VedicError::UnknownTrait(s.to_string())),
        }
    }
}

/// Traits declared for the native. `None` means not declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalTraits {
    pub height: Option<Height>,
    pub build: Option<Build>,
    pub complexion: Option<Complexion>,
}

impl PhysicalTraits {
    pub fn is_empty(&self) -> bool {
        self.height.is_none() && self.build.is_none() && self.complexion.is_none()
    }
}

/// Per-trait scores; `None` for undeclared traits.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitScores {
    pub height: Option<f64>,
    pub build: Option<f64>,
    pub complexion: Option<f64>,
    /// Mean of the declared checks, 0 when none were declared.
    pub overall: f64,
}

/// Mean of the evaluated checks; 0 when nothing was evaluated.
pub fn mean_of_evaluated(checks: &[Option<f64>]) -> f64 {
    let (sum, n) = checks
        .iter()
        .flatten()
        .fold((0.0, 0u32), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / f64::from(n) }
}

/// Grahas whose degree within their sign is within 5° of the lagna's.
pub fn grahas_in_lagna(lagna_lon: f64, grahas: &GrahaLongitudes) -> Vec<Graha> {
    let lagna_deg = degree_in_sign(lagna_lon);
    ALL_GRAHAS
        .into_iter()
        .filter(|&g| (degree_in_sign(grahas.longitude(g)) - lagna_deg).abs() < IN_LAGNA_ORB_DEG)
        .collect()
}

/// Score declared traits against a chart.
pub fn score_traits(
    lagna_lon: f64,
    grahas: &GrahaLongitudes,
    traits: &PhysicalTraits,
) -> TraitScores {
    let lagna_sign = sign_of(lagna_lon);
    let lagna_lord = sign_lord(lagna_sign);
    let in_lagna = grahas_in_lagna(lagna_lon, grahas);
    let present = |list: &[Graha]| list.iter().any(|g| in_lagna.contains(g));

    let height = traits
        .height
        .map(|h| if h.signs().contains(&lagna_sign) { 100.0 } else { 0.0 });
    let build = traits.build.map(|b| {
        let list = b.grahas();
        if list.contains(&lagna_lord) || present(list) {
            100.0
        } else {
            50.0
        }
    });
    let complexion = traits
        .complexion
        .map(|c| if present(c.grahas()) { 100.0 } else { 0.0 });

    TraitScores {
        height,
        build,
        complexion,
        overall: mean_of_evaluated(&[height, build, complexion]),
    }
}
