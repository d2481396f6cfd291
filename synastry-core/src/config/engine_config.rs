//! Score engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONFLICT_CEILING, DEFAULT_CONFLICT_PENALTY, DEFAULT_EAST_WEIGHT,
    DEFAULT_SYNERGY_BONUS, DEFAULT_WEST_WEIGHT,
};
use crate::errors::ConfigError;

/// Tunables for the scoring blend and its adjustments.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Blend weight for the Western element relation. Default: 0.4.
    pub west_weight: Option<f64>,
    /// Blend weight for the Chinese relation. Default: 0.6.
    pub east_weight: Option<f64>,
    /// Bonus when both layers are independently favorable. Default: 8.
    pub synergy_bonus: Option<i32>,
    /// Penalty when both layers are independently unfavorable. Default: 8.
    pub conflict_penalty: Option<i32>,
    /// Score ceiling for conflict-tagged pairs (0-100). Default: 58.
    pub conflict_ceiling: Option<u8>,
    /// Promote an identical self-pair combo to the top tier. Default: true.
    pub promote_identical_combo: Option<bool>,
}

impl EngineConfig {
    pub fn effective_west_weight(&self) -> f64 {
        self.west_weight.unwrap_or(DEFAULT_WEST_WEIGHT)
    }

    pub fn effective_east_weight(&self) -> f64 {
        self.east_weight.unwrap_or(DEFAULT_EAST_WEIGHT)
    }

    pub fn effective_synergy_bonus(&self) -> i32 {
        self.synergy_bonus.unwrap_or(DEFAULT_SYNERGY_BONUS)
    }

    pub fn effective_conflict_penalty(&self) -> i32 {
        self.conflict_penalty.unwrap_or(DEFAULT_CONFLICT_PENALTY)
    }

    pub fn effective_conflict_ceiling(&self) -> u8 {
        self.conflict_ceiling.unwrap_or(DEFAULT_CONFLICT_CEILING)
    }

    pub fn effective_promote_identical_combo(&self) -> bool {
        self.promote_identical_combo.unwrap_or(true)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let west = self.effective_west_weight();
        let east = self.effective_east_weight();
        if west < 0.0 || east < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.west_weight".into(),
                message: "weights must be non-negative".into(),
            });
        }
        // Weights must blend, not amplify.
        if ((west + east) - 1.0).abs() > 0.05 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.east_weight".into(),
                message: format!("weights must sum to 1.0, got {}", west + east),
            });
        }
        if self.effective_conflict_ceiling() > 100 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.conflict_ceiling".into(),
                message: "ceiling must be within [0, 100]".into(),
            });
        }
        Ok(())
    }
}
