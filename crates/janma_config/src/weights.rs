//! Weights of the composite candidate score.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Relative weight of each component in the composite score.
///
/// The defaults sum to 1.0. Components are scored on 0–100, so the
/// composite stays on 0–100 as long as the weights sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompositeWeights {
    pub degree_match: f64,
    pub trine: f64,
    pub verification: f64,
    pub traits: f64,
    pub events: f64,
    pub nisheka: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            degree_match: 0.20,
            trine: 0.15,
            verification: 0.15,
            traits: 0.20,
            events: 0.20,
            nisheka: 0.10,
        }
    }
}

impl CompositeWeights {
    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    fn as_array(&self) -> [f64; 6] {
        [
            self.degree_match,
            self.trine,
            self.verification,
            self.traits,
            self.events,
            self.nisheka,
        ]
    }

    /// Reject negative or non-finite weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.as_array().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::invalid(
                "weights",
                "every weight must be finite and non-negative",
            ));
        }
        Ok(())
    }
}
