//! # Inbound Ports
//!
//! API trait defining what the DNA engine can do.

use shared_types::{Dna, ItemId, SchemaHash, Word};

use crate::domain::{
    Accepted, AssignedItem, AttributeMap, DnaError, RegistryState, TraitDefinition, TraitSchema,
};

/// DNA engine API - inbound port.
///
/// All operations are synchronous and CPU-bound. Only `register*` touch
/// shared state.
pub trait DnaEngineApi: Send + Sync {
    /// Derive the DNA of an item from its word vector.
    fn derive_dna(&self, item_id: ItemId, words: &[Word]) -> Dna;

    /// Parse textual inputs and derive the DNA.
    fn derive_dna_from_strs(&self, item_id: &str, words: &[&str]) -> Result<Dna, DnaError>;

    /// Expand a DNA into trait values, in `traits` order.
    fn resolve_attributes(
        &self,
        schema_hash: &SchemaHash,
        dna: &Dna,
        traits: &[TraitDefinition],
    ) -> Result<AttributeMap, DnaError>;

    /// Expand a DNA against a validated schema and its own hash.
    fn resolve_schema(&self, schema: &TraitSchema, dna: &Dna) -> Result<AttributeMap, DnaError>;

    /// Whether `dna` is already registered.
    fn contains(&self, dna: &Dna) -> bool;

    /// Atomically register one DNA, or fail with `DuplicateDna`.
    fn register(&self, dna: Dna) -> Result<Accepted, DnaError>;

    /// Atomically register a batch (all or nothing), checking both in-batch
    /// distinctness and registered history.
    fn register_batch(&self, batch: &[Dna]) -> Result<usize, DnaError>;

    /// Local pairwise-distinctness pre-check; does not consult history.
    fn check_batch_unique(&self, batch: &[Dna]) -> bool;

    /// Derive, register and resolve one item.
    fn assign(
        &self,
        item_id: ItemId,
        words: &[Word],
        schema: &TraitSchema,
    ) -> Result<AssignedItem, DnaError>;

    /// Current registry state.
    fn registry_state(&self) -> RegistryState;
}
