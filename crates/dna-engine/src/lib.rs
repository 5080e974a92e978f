//! # DNA Engine
//!
//! Deterministic identity derivation and uniqueness enforcement for
//! generative collections.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Derive a 32-byte DNA from an item id and its entropy words, bit-exact
//!   with Solidity `keccak256(abi.encodePacked(id, words))`
//! - Resolve a DNA into trait values under a schema, each trait seeded
//!   independently so adding or reordering traits never shifts the others
//! - Enforce DNA uniqueness within a population with an atomic
//!   check-then-insert registry
//!
//! ## Guarantees
//!
//! | Property | Description |
//! |----------|-------------|
//! | Determinism | Same `(id, words)` always yields the same DNA |
//! | Independence | A trait's value depends only on schema hash, DNA and its own name |
//! | Range | Every resolved value is `< cardinality` |
//! | Soundness | Two concurrent registrations of one DNA: exactly one succeeds |
//!
//! ## Module Structure
//!
//! ```text
//! dna-engine/
//! ├── domain/          # Schemas, attribute maps, registry states, errors
//! ├── algorithms/      # DNA derivation, trait resolution, batch checks
//! ├── ports/           # Engine API + store / chain-context traits
//! ├── adapters/        # In-memory store (mutex or rwlock)
//! ├── registry.rs      # Population-scoped uniqueness registry
//! └── service.rs       # DnaEngineService wiring it all together
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod registry;
pub mod service;

// Re-exports
pub use adapters::InMemoryDnaStore;
pub use algorithms::{
    check_batch_unique, derive_dna, derive_dna_from_strs, first_duplicate, resolve_attributes,
    resolve_attributes_with, resolve_trait_value, trait_name_hash, trait_seed,
};
pub use config::{EngineConfig, DEFAULT_MAX_BATCH_SIZE};
pub use domain::{
    invariant_deterministic_derivation, invariant_valid_cardinality, invariant_valid_schema,
    invariant_value_in_range, Accepted, AssignedItem, AttributeMap, BlockEntropy, DnaError,
    LockDiscipline, RegistryState, SchemaHashPacking, TraitDefinition, TraitSchema,
};
pub use metrics::{EngineMetrics, MetricsSnapshot};
pub use ports::{ChainContextProvider, DnaEngineApi, DnaStore, MockChainContext};
pub use registry::UniquenessRegistry;
pub use service::DnaEngineService;
pub use shared_types::{Dna, ItemId, SchemaHash, Word, U256};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
