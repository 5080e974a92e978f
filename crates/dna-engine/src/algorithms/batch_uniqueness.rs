//! # Batch Uniqueness
//!
//! Local distinctness check for a proposed batch: `|set(batch)| == |batch|`.
//! Registered history is not consulted; a batch that passes here can still
//! collide with an earlier registration.

use shared_types::Dna;
use std::collections::HashSet;

/// True iff every DNA in `batch` is pairwise distinct.
pub fn check_batch_unique(batch: &[Dna]) -> bool {
    first_duplicate(batch).is_none()
}

/// First DNA that repeats an earlier element of `batch`.
pub fn first_duplicate(batch: &[Dna]) -> Option<Dna> {
    let mut seen = HashSet::with_capacity(batch.len());
    batch.iter().find(|dna| !seen.insert(**dna)).copied()
}
