//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for the DNA engine.

mod in_memory_store;

pub use in_memory_store::InMemoryDnaStore;
