//! # DNA Derivation
//!
//! `dna = keccak256(abi.encodePacked(uint256 itemId, uint256[] words))`
//!
//! An empty word vector contributes no bytes, so the DNA then depends on the
//! item id alone.

use shared_crypto::PackedEncoder;
use shared_types::{parse_uint256, parse_words, Dna, ItemId, Word};

use crate::domain::DnaError;

/// Derive the DNA of one item. Pure; never fails.
pub fn derive_dna(item_id: ItemId, words: &[Word]) -> Dna {
    let mut encoder = PackedEncoder::with_capacity(32 * (1 + words.len()));
    encoder.uint256(item_id).uint256_array(words);
    Dna::new(encoder.keccak256())
}

/// Parse textual inputs (decimal or `0x` hex) and derive the DNA.
///
/// Malformed inputs are rejected before anything is hashed.
pub fn derive_dna_from_strs<S: AsRef<str>>(item_id: &str, words: &[S]) -> Result<Dna, DnaError> {
    let item_id = parse_uint256(item_id)?;
    let words = parse_words(words)?;
    Ok(derive_dna(item_id, &words))
}
