//! Configuration for the rectification search.
//!
//! Values are layered: built-in defaults, then an optional TOML file
//! (explicit path or `JANMA_CONFIG`), then `JANMA_*` environment overrides.
//! The merged result is validated once at the end.

pub mod error;
pub mod weights;

use std::path::{Path, PathBuf};

use janma_ephem::AyanamshaSystem;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use weights::CompositeWeights;

/// Environment variable naming a TOML configuration file.
pub const ENV_CONFIG_PATH: &str = "JANMA_CONFIG";
/// Environment override for [`RectifyConfig::step_minutes`].
pub const ENV_STEP_MINUTES: &str = "JANMA_STEP_MINUTES";
/// Environment override for [`RectifyConfig::orb_deg`].
pub const ENV_ORB_DEG: &str = "JANMA_ORB_DEG";
/// Environment override for [`RectifyConfig::ayanamsha`].
pub const ENV_AYANAMSHA: &str = "JANMA_AYANAMSHA";

/// Default candidate spacing in minutes.
pub const DEFAULT_STEP_MINUTES: u32 = 10;
/// Default half-width of an approximate-time window, hours.
pub const DEFAULT_APPROX_WINDOW_HOURS: f64 = 3.0;

/// Search settings shared by the CLI and library callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RectifyConfig {
    /// Spacing of candidate instants, minutes.
    pub step_minutes: u32,
    /// Orb for the verification anchors, degrees.
    pub orb_deg: f64,
    pub ayanamsha: AyanamshaSystem,
    /// Half-width of the window around an approximate birth time, hours.
    pub approx_window_hours: f64,
    /// Keep only the best N candidates.
    pub max_candidates: Option<usize>,
    pub weights: CompositeWeights,
}

impl Default for RectifyConfig {
    fn default() -> Self {
        Self {
            step_minutes: DEFAULT_STEP_MINUTES,
            orb_deg: 2.0,
            ayanamsha: AyanamshaSystem::Lahiri,
            approx_window_hours: DEFAULT_APPROX_WINDOW_HOURS,
            max_candidates: None,
            weights: CompositeWeights::default(),
        }
    }
}

impl RectifyConfig {
    /// Parse TOML text; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply `JANMA_*` overrides using `lookup` as the environment.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(v) = lookup(ENV_STEP_MINUTES) {
            self.step_minutes = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("step_minutes", format!("'{v}' is not a whole number")))?;
        }
        if let Some(v) = lookup(ENV_ORB_DEG) {
            self.orb_deg = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("orb_deg", format!("'{v}' is not a number")))?;
        }
        if let Some(v) = lookup(ENV_AYANAMSHA) {
            self.ayanamsha = v
                .parse()
                .map_err(|e: janma_ephem::UnknownAyanamsha| ConfigError::invalid("ayanamsha", e.to_string()))?;
        }
        Ok(())
    }

    /// Check ranges after all layers are merged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_minutes == 0 {
            return Err(ConfigError::invalid("step_minutes", "must be at least 1"));
        }
        if !self.orb_deg.is_finite() || self.orb_deg <= 0.0 {
            return Err(ConfigError::invalid("orb_deg", "must be a positive number of degrees"));
        }
        if !self.approx_window_hours.is_finite()
            || self.approx_window_hours <= 0.0
            || self.approx_window_hours > 12.0
        {
            return Err(ConfigError::invalid(
                "approx_window_hours",
                "must be in (0, 12]",
            ));
        }
        if self.max_candidates == Some(0) {
            return Err(ConfigError::invalid("max_candidates", "must be at least 1 when set"));
        }
        self.weights.validate()
    }

    /// Full layered load with an injectable environment.
    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = path
            .map(Path::to_path_buf)
            .or_else(|| lookup(ENV_CONFIG_PATH).map(PathBuf::from));
        let mut config = match file {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };
        config.apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Full layered load from the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let c = RectifyConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.step_minutes, 10);
        assert!((c.orb_deg - 2.0).abs() < 1e-12);
        assert_eq!(c.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(c.max_candidates, None);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = RectifyConfig::from_toml_str("step_minutes = 5\n[weights]\nnisheka = 0.0\n").unwrap();
        assert_eq!(c.step_minutes, 5);
        assert!((c.orb_deg - 2.0).abs() < 1e-12);
        assert_eq!(c.weights.nisheka, 0.0);
        assert!((c.weights.degree_match - 0.20).abs() < 1e-12);
    }

    #[test]
    fn ayanamsha_from_toml() {
        let c = RectifyConfig::from_toml_str("ayanamsha = \"krishnamurti\"").unwrap();
        assert_eq!(c.ayanamsha, AyanamshaSystem::Krishnamurti);
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        assert!(matches!(
            RectifyConfig::from_toml_str("stepminutes = 5"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn env_overrides_apply() {
        let c = RectifyConfig::load_with(
            None,
            env(&[
                (ENV_STEP_MINUTES, "15"),
                (ENV_ORB_DEG, "1.5"),
                (ENV_AYANAMSHA, "raman"),
            ]),
        )
        .unwrap();
        assert_eq!(c.step_minutes, 15);
        assert!((c.orb_deg - 1.5).abs() < 1e-12);
        assert_eq!(c.ayanamsha, AyanamshaSystem::Raman);
    }

    #[test]
    fn bad_env_values_rejected() {
        assert!(matches!(
            RectifyConfig::load_with(None, env(&[(ENV_STEP_MINUTES, "ten")])),
            Err(ConfigError::InvalidValue { key: "step_minutes", .. })
        ));
        assert!(matches!(
            RectifyConfig::load_with(None, env(&[(ENV_AYANAMSHA, "tropical")])),
            Err(ConfigError::InvalidValue { key: "ayanamsha", .. })
        ));
        assert!(matches!(
            RectifyConfig::load_with(None, env(&[(ENV_ORB_DEG, "0")])),
            Err(ConfigError::InvalidValue { key: "orb_deg", .. })
        ));
    }

    #[test]
    fn zero_step_rejected() {
        let c = RectifyConfig {
            step_minutes: 0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RectifyConfig::load_with(None, env(&[(ENV_CONFIG_PATH, "/nonexistent/janma.toml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
