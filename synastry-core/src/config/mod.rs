//! Configuration loading and validation.
//!
//! All fields are optional in the file; `effective_*()` accessors fall
//! back to the defaults in [`crate::constants`].

pub mod cache_config;
pub mod engine_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use cache_config::CacheConfig;
pub use engine_config::EngineConfig;

/// Top-level Synastry configuration, typically loaded from `synastry.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SynastryConfig {
    pub engine: EngineConfig,
    pub cache: CacheConfig,
}

impl SynastryConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SynastryConfig =
            toml::from_str(text).map_err(|e| ConfigError::ParseFailed {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validate cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.cache.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SynastryConfig::from_toml_str("").unwrap();
        assert!((config.engine.effective_east_weight() - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.cache.effective_capacity(), 50);
    }

    #[test]
    fn partial_config_parses() {
        let config = SynastryConfig::from_toml_str(
            r#"
            [engine]
            synergy_bonus = 10

            [cache]
            capacity = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.effective_synergy_bonus(), 10);
        assert_eq!(config.cache.effective_capacity(), 20);
    }

    #[test]
    fn bad_weights_rejected() {
        let err = SynastryConfig::from_toml_str(
            r#"
            [engine]
            west_weight = 0.9
            east_weight = 0.9
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }
}
