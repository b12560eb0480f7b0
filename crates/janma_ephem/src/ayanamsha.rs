//! Ayanamsha: offset of the sidereal zodiac from the mean equinox of date.
//!
//! Each system is a J2000.0 reference value plus the IAU 2006 general
//! precession in longitude.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use janma_time::jd_to_centuries;

use crate::frames::general_precession_longitude_deg;

/// Supported sidereal reference systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AyanamshaSystem {
    /// Chitrapaksha: Spica at 0° Tula.
    #[default]
    Lahiri,
    /// B.V. Raman.
    Raman,
    /// Krishnamurti Paddhati.
    Krishnamurti,
    /// Fagan-Bradley synetic vernal point.
    FaganBradley,
}

/// All supported systems.
pub const ALL_AYANAMSHAS: [AyanamshaSystem; 4] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::Raman,
    AyanamshaSystem::Krishnamurti,
    AyanamshaSystem::FaganBradley,
];

impl AyanamshaSystem {
    /// Ayanamsha at J2000.0, degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::Raman => 22.370,
            Self::Krishnamurti => 23.850,
            Self::FaganBradley => 24.736,
        }
    }

    /// Identifier used in configuration and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::Raman => "raman",
            Self::Krishnamurti => "krishnamurti",
            Self::FaganBradley => "fagan_bradley",
        }
    }
}

impl Display for AyanamshaSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised ayanamsha name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAyanamsha(pub String);

impl Display for UnknownAyanamsha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown ayanamsha '{}' (expected lahiri, raman, krishnamurti or fagan_bradley)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAyanamsha {}

impl FromStr for AyanamshaSystem {
    type Err = UnknownAyanamsha;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "lahiri" | "chitrapaksha" => Ok(Self::Lahiri),
            "raman" => Ok(Self::Raman),
            "krishnamurti" | "kp" => Ok(Self::Krishnamurti),
            "fagan_bradley" | "faganbradley" => Ok(Self::FaganBradley),
            _ => Err(UnknownAyanamsha(s.to_string())),
        }
    }
}

/// Ayanamsha in degrees at `jd`.
pub fn ayanamsha_deg(system: AyanamshaSystem, jd: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_longitude_deg(jd_to_centuries(jd))
}
