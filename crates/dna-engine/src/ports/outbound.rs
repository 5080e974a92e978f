//! # Outbound Ports
//!
//! Traits for external dependencies: the DNA store behind the uniqueness
//! registry, and the chain context that supplies block entropy.

use async_trait::async_trait;
use shared_types::Dna;

use crate::domain::{BlockEntropy, DnaError};

/// Set of accepted DNA values for one population - outbound port.
///
/// Implementations own their locking. `insert_if_absent` and
/// `insert_all_if_absent` must perform check-then-insert as one critical
/// section, so two concurrent callers can never both insert the same DNA.
/// Entries are never removed.
pub trait DnaStore: Send + Sync {
    /// Whether `dna` is present.
    fn contains(&self, dna: &Dna) -> bool;

    /// Insert `dna` unless present. Returns the new size, or
    /// `DuplicateDna` without mutating anything.
    fn insert_if_absent(&self, dna: Dna) -> Result<usize, DnaError>;

    /// Insert every DNA of `batch` unless any is present or repeated.
    /// All or nothing; returns the new size.
    fn insert_all_if_absent(&self, batch: &[Dna]) -> Result<usize, DnaError>;

    /// Number of stored DNA values.
    fn len(&self) -> usize;

    /// Whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Chain context provider - outbound port.
///
/// Supplies block entropy that callers fold into word vectors. The engine
/// never awaits this itself.
#[async_trait]
pub trait ChainContextProvider: Send + Sync {
    /// Entropy of the latest block.
    async fn current_block(&self) -> Result<BlockEntropy, DnaError>;

    /// Entropy of a specific block.
    async fn block(&self, number: u64) -> Result<BlockEntropy, DnaError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock chain context with synthetic, deterministic blocks.
#[derive(Clone, Default)]
pub struct MockChainContext {
    /// Latest block number.
    pub head: u64,
    /// Timestamp of block 0.
    pub genesis_timestamp: u64,
    /// Seconds between blocks.
    pub block_time: u64,
}

impl MockChainContext {
    fn synthesize(&self, number: u64) -> BlockEntropy {
        let mut hash = [0u8; 32];
        hash[..8].copy_from_slice(&number.to_be_bytes());
        hash[24..].copy_from_slice(&(!number).to_be_bytes());
        BlockEntropy {
            number,
            hash,
            timestamp: self.genesis_timestamp + number * self.block_time,
        }
    }
}

#[async_trait]
impl ChainContextProvider for MockChainContext {
    async fn current_block(&self) -> Result<BlockEntropy, DnaError> {
        Ok(self.synthesize(self.head))
    }

    async fn block(&self, number: u64) -> Result<BlockEntropy, DnaError> {
        if number > self.head {
            return Err(DnaError::ChainContext(format!(
                "block {} is beyond head {}",
                number, self.head
            )));
        }
        Ok(self.synthesize(number))
    }
}
