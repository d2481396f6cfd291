//! Client result cache configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECONDS};
use crate::errors::ConfigError;

/// Configuration for the bounded, TTL'd client result cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached pair results. Default: 50.
    pub capacity: Option<usize>,
    /// Entry time-to-live in seconds. Default: 86400 (24 hours).
    pub ttl_seconds: Option<u64>,
    /// Path to the persistence database. Default: in-memory only.
    pub db_path: Option<String>,
}

impl CacheConfig {
    pub fn effective_capacity(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_CACHE_CAPACITY)
    }

    pub fn effective_ttl_seconds(&self) -> u64 {
        self.ttl_seconds.unwrap_or(DEFAULT_CACHE_TTL_SECONDS)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.effective_capacity() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cache.capacity".into(),
                message: "capacity must be at least 1".into(),
            });
        }
        if self.effective_ttl_seconds() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cache.ttl_seconds".into(),
                message: "ttl must be at least 1 second".into(),
            });
        }
        Ok(())
    }
}
