//! # Attribute Resolution
//!
//! Expands a DNA into trait values:
//!
//! ```text
//! nameHash  = keccak256(abi.encodePacked(string name))
//! traitSeed = keccak256(abi.encodePacked(bytes32 schemaHash, bytes32 dna, bytes32 nameHash))
//! value     = uint256(traitSeed) % cardinality
//! ```
//!
//! `nameHash` separates the trait domains, so two traits under the same
//! `(schemaHash, dna)` get independent seeds.
//!
//! ## Modulo bias
//!
//! `seed % cardinality` slightly favours low values whenever cardinality does
//! not divide 2^256. For realistic cardinalities the skew is below 2^-200 and
//! is accepted. On-chain verifiers compute exactly this expression, so it must
//! not be replaced by rejection sampling or any other unbiased reduction.

use shared_crypto::{keccak256, Hash, PackedEncoder};
use shared_types::{Dna, SchemaHash, U256};

use crate::domain::{
    invariant_valid_cardinality, invariant_valid_schema, AttributeMap, DnaError,
    SchemaHashPacking, TraitDefinition,
};

/// `keccak256(abi.encodePacked(string name))`
pub fn trait_name_hash(name: &str) -> Hash {
    keccak256(name.as_bytes())
}

/// Per-trait seed for one `(schema, dna, trait)` triple.
pub fn trait_seed(
    schema_hash: &SchemaHash,
    dna: &Dna,
    name_hash: &Hash,
    packing: SchemaHashPacking,
) -> Hash {
    let mut encoder = PackedEncoder::with_capacity(130);
    match packing {
        SchemaHashPacking::Bytes32 => encoder.bytes32(schema_hash.as_bytes()),
        SchemaHashPacking::HexString => encoder.string(&schema_hash.to_hex()),
    };
    encoder.bytes32(dna.as_bytes()).bytes32(name_hash);
    encoder.keccak256()
}

/// Resolve a single trait.
pub fn resolve_trait_value(
    schema_hash: &SchemaHash,
    dna: &Dna,
    def: &TraitDefinition,
    packing: SchemaHashPacking,
) -> Result<U256, DnaError> {
    invariant_valid_cardinality(def)?;
    let seed = trait_seed(schema_hash, dna, &trait_name_hash(&def.name), packing);
    Ok(U256::from_big_endian(&seed) % def.cardinality)
}

/// Resolve every trait with the on-chain (`bytes32`) layout.
pub fn resolve_attributes(
    schema_hash: &SchemaHash,
    dna: &Dna,
    traits: &[TraitDefinition],
) -> Result<AttributeMap, DnaError> {
    resolve_attributes_with(schema_hash, dna, traits, SchemaHashPacking::Bytes32)
}

/// Resolve every trait, in schema order, with an explicit schema packing.
///
/// The whole schema is validated first; on error no values are produced.
pub fn resolve_attributes_with(
    schema_hash: &SchemaHash,
    dna: &Dna,
    traits: &[TraitDefinition],
    packing: SchemaHashPacking,
) -> Result<AttributeMap, DnaError> {
    invariant_valid_schema(traits)?;

    let mut attributes = AttributeMap::with_capacity(traits.len());
    for def in traits {
        let value = resolve_trait_value(schema_hash, dna, def, packing)?;
        attributes.push(def.name.clone(), value);
    }
    Ok(attributes)
}
