//! # Domain Errors
//!
//! Error kinds surfaced by the DNA engine. Nothing is retried internally;
//! retry-on-duplicate is a caller policy.

use shared_types::{Dna, TypeError};
use thiserror::Error;

/// DNA engine error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnaError {
    /// A trait definition cannot be resolved (cardinality 0, empty or
    /// repeated name). Caller defect; fatal to the resolution call.
    #[error("Invalid schema: trait {trait_name:?} {reason}")]
    InvalidSchema {
        /// Offending trait name
        trait_name: String,
        /// What is wrong with it
        reason: String,
    },

    /// DNA already registered in this population, or repeated in a batch.
    #[error("Duplicate DNA: {0}")]
    DuplicateDna(Dna),

    /// Non-numeric or out-of-range input, rejected before hashing.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Attribute map could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Chain context provider failure.
    #[error("Chain context error: {0}")]
    ChainContext(String),
}

impl DnaError {
    /// Whether a caller can recover by regenerating entropy and retrying.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DuplicateDna(_) | Self::ChainContext(_))
    }

    pub(crate) fn invalid_schema(trait_name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            trait_name: trait_name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<TypeError> for DnaError {
    fn from(err: TypeError) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

impl From<serde_json::Error> for DnaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
