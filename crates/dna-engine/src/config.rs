//! DNA engine configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use dna_engine::{EngineConfig, LockDiscipline};
//!
//! let config = EngineConfig::new("genesis-cats")
//!     .with_lock_discipline(LockDiscipline::ReadWrite)
//!     .with_max_batch_size(500);
//! config.validate()?;
//! ```

use serde::{Deserialize, Serialize};
use std::env;

use crate::domain::{DnaError, LockDiscipline, SchemaHashPacking};

/// Default upper bound for batch operations.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 10_000;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Population (collection) label; scopes the uniqueness registry.
    pub population: String,
    /// Lock guarding the registry's check-then-insert.
    pub lock_discipline: LockDiscipline,
    /// How the schema hash is packed into trait seeds.
    pub schema_packing: SchemaHashPacking,
    /// Largest batch accepted by `register_batch`.
    pub max_batch_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population: "default".to_string(),
            lock_discipline: LockDiscipline::Mutex,
            schema_packing: SchemaHashPacking::Bytes32,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl EngineConfig {
    /// Defaults for a named population.
    pub fn new(population: impl Into<String>) -> Self {
        Self {
            population: population.into(),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DNA_POPULATION`: population label (default: default)
    /// - `DNA_LOCK_DISCIPLINE`: `mutex` | `rwlock` (default: mutex)
    /// - `DNA_SCHEMA_PACKING`: `bytes32` | `hex-string` (default: bytes32)
    /// - `DNA_MAX_BATCH_SIZE`: batch bound (default: 10000)
    pub fn from_env() -> Result<Self, DnaError> {
        let defaults = Self::default();

        let population = env::var("DNA_POPULATION").unwrap_or(defaults.population);

        let lock_discipline = match env::var("DNA_LOCK_DISCIPLINE") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.lock_discipline,
        };

        let schema_packing = match env::var("DNA_SCHEMA_PACKING") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.schema_packing,
        };

        let max_batch_size = match env::var("DNA_MAX_BATCH_SIZE") {
            Ok(v) => v.trim().parse().map_err(|_| {
                DnaError::Config(format!("DNA_MAX_BATCH_SIZE is not a number: {v}"))
            })?,
            Err(_) => defaults.max_batch_size,
        };

        let config = Self {
            population,
            lock_discipline,
            schema_packing,
            max_batch_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), DnaError> {
        if self.population.trim().is_empty() {
            return Err(DnaError::Config("population cannot be empty".to_string()));
        }

        if self.max_batch_size == 0 {
            return Err(DnaError::Config("max_batch_size cannot be 0".to_string()));
        }

        Ok(())
    }

    /// Builder-style method to set the lock discipline
    pub fn with_lock_discipline(mut self, discipline: LockDiscipline) -> Self {
        self.lock_discipline = discipline;
        self
    }

    /// Builder-style method to set the schema packing
    pub fn with_schema_packing(mut self, packing: SchemaHashPacking) -> Self {
        self.schema_packing = packing;
        self
    }

    /// Builder-style method to set the batch bound
    pub fn with_max_batch_size(mut self, max: usize) -> Self {
        self.max_batch_size = max;
        self
    }
}
