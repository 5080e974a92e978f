//! # Domain Invariants
//!
//! Business rules that must always hold for DNA derivation and trait
//! resolution.

use shared_types::{Dna, ItemId, Word, U256};
use std::collections::HashSet;

use super::entities::TraitDefinition;
use super::errors::DnaError;

/// Invariant: every trait can take at least one value.
///
/// A zero cardinality would divide by zero in `seed mod cardinality`.
pub fn invariant_valid_cardinality(def: &TraitDefinition) -> Result<(), DnaError> {
    if def.cardinality.is_zero() {
        return Err(DnaError::invalid_schema(&def.name, "has cardinality 0"));
    }
    Ok(())
}

/// Invariant: a schema has non-empty, unique trait names and positive
/// cardinalities.
///
/// Checked for the whole schema before any hashing, so a bad trait never
/// yields a partial attribute map.
pub fn invariant_valid_schema(traits: &[TraitDefinition]) -> Result<(), DnaError> {
    let mut seen = HashSet::with_capacity(traits.len());
    for def in traits {
        if def.name.is_empty() {
            return Err(DnaError::invalid_schema(&def.name, "has an empty name"));
        }
        invariant_valid_cardinality(def)?;
        if !seen.insert(def.name.as_str()) {
            return Err(DnaError::invalid_schema(&def.name, "is defined twice"));
        }
    }
    Ok(())
}

/// Invariant: a resolved value lies in `[0, cardinality)`.
pub fn invariant_value_in_range(value: U256, cardinality: U256) -> bool {
    value < cardinality
}

/// Invariant: DNA derivation is deterministic.
///
/// Same item id + same words = same DNA.
pub fn invariant_deterministic_derivation<F>(derive_fn: F, item_id: ItemId, words: &[Word]) -> bool
where
    F: Fn(ItemId, &[Word]) -> Dna,
{
    derive_fn(item_id, words) == derive_fn(item_id, words)
}
