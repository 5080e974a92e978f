//! # Algorithms Module
//!
//! Pure, stateless functions: DNA derivation, trait resolution and batch
//! distinctness. Safe to call from any number of threads.

pub mod attribute_resolution;
pub mod batch_uniqueness;
pub mod dna_derivation;

pub use attribute_resolution::{
    resolve_attributes, resolve_attributes_with, resolve_trait_value, trait_name_hash, trait_seed,
};
pub use batch_uniqueness::{check_batch_unique, first_duplicate};
pub use dna_derivation::{derive_dna, derive_dna_from_strs};
