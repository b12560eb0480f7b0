//! Rectification filter: the trine gate and three alignment scores
//! (BPHS 4.6, 4.8, 4.10).

use crate::error::VedicError;
use crate::util::{angular_difference, normalize_360, sign_of};

/// Default orb for degree alignment.
pub const DEFAULT_ORB_DEG: f64 = 2.0;

/// Outcome of the filter for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerificationScores {
    /// Lagna vs sphuta Pranapada, 0-100.
    pub degree_match: f64,
    /// Lagna (or its 7th point) vs Gulika, 0-100.
    pub gulika_alignment: f64,
    /// Lagna vs Moon, 0-100.
    pub moon_alignment: f64,
    /// Best of the three alignments.
    pub combined_verification: f64,
    pub passes_trine_rule: bool,
    /// Shortest arc between lagna and Pranapada, degrees.
    pub delta_to_pranapada: f64,
}

impl VerificationScores {
    /// Trine holds and at least one alignment falls inside the orb.
    pub fn accepted(&self) -> bool {
        self.passes_trine_rule && self.combined_verification > 0.0
    }
}

/// Whether the lagna sign is 1st, 5th or 9th from the Pranapada sign.
pub fn passes_trine_rule(lagna_lon: f64, pranapada_lon: f64) -> bool {
    let diff = (i32::from(sign_of(lagna_lon)) - i32::from(sign_of(pranapada_lon))).rem_euclid(12);
    matches!(diff, 0 | 4 | 8)
}

/// Linear falloff from 100 at zero separation to 0 at the orb.
pub fn alignment_score(delta_deg: f64, orb_deg: f64) -> f64 {
    (((orb_deg - delta_deg) / orb_deg).max(0.0) * 100.0).min(100.0)
}

/// The mandatory gate and verification scores, for a fixed orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectificationFilter {
    orb_deg: f64,
}

impl Default for RectificationFilter {
    fn default() -> Self {
        Self {
            orb_deg: DEFAULT_ORB_DEG,
        }
    }
}

impl RectificationFilter {
    /// Filter with a custom orb; rejects non-positive or non-finite values.
    pub fn new(orb_deg: f64) -> Result<Self, VedicError> {
        if orb_deg.is_finite() && orb_deg > 0.0 {
            Ok(Self { orb_deg })
        } else {
            Err(VedicError::InvalidOrb(orb_deg))
        }
    }

    pub fn orb_deg(&self) -> f64 {
        self.orb_deg
    }

    /// Degree match between lagna and sphuta Pranapada.
    pub fn degree_match(&self, lagna_lon: f64, pranapada_lon: f64) -> f64 {
        alignment_score(angular_difference(lagna_lon, pranapada_lon), self.orb_deg)
    }

    /// Gulika alignment; the lagna or the point opposite it may align.
    pub fn gulika_alignment(&self, lagna_lon: f64, gulika_lon: f64) -> f64 {
        let delta = angular_difference(lagna_lon, gulika_lon)
            .min(angular_difference(normalize_360(lagna_lon + 180.0), gulika_lon));
        alignment_score(delta, self.orb_deg)
    }

    /// Moon alignment with the lagna.
    pub fn moon_alignment(&self, lagna_lon: f64, moon_lon: f64) -> f64 {
        alignment_score(angular_difference(lagna_lon, moon_lon), self.orb_deg)
    }

    /// Run every check for one candidate.
    pub fn evaluate(
        &self,
        lagna_lon: f64,
        pranapada_lon: f64,
        gulika_lon: f64,
        moon_lon: f64,
    ) -> VerificationScores {
        let degree_match = self.degree_match(lagna_lon, pranapada_lon);
        let gulika_alignment = self.gulika_alignment(lagna_lon, gulika_lon);
        let moon_alignment = self.moon_alignment(lagna_lon, moon_lon);
        VerificationScores {
            degree_match,
            gulika_alignment,
            moon_alignment,
            combined_verification: degree_match.max(gulika_alignment).max(moon_alignment),
            passes_trine_rule: passes_trine_rule(lagna_lon, pranapada_lon),
            delta_to_pranapada: angular_difference(lagna_lon, pranapada_lon),
        }
    }
}
