//! DNA Engine Service
//!
//! Implements `DnaEngineApi` by wiring the pure algorithms to a uniqueness
//! registry, the configured schema packing and the metrics counters.

use dna_telemetry::log_dna_event;
use shared_types::{Dna, ItemId, SchemaHash, Word};
use std::sync::Arc;
use tracing::debug;

use crate::adapters::InMemoryDnaStore;
use crate::algorithms::{self, resolve_attributes_with};
use crate::config::EngineConfig;
use crate::domain::{
    Accepted, AssignedItem, AttributeMap, DnaError, RegistryState, TraitDefinition, TraitSchema,
};
use crate::metrics::{EngineMetrics, MetricsSnapshot};
use crate::ports::inbound::DnaEngineApi;
use crate::ports::outbound::DnaStore;
use crate::registry::UniquenessRegistry;

/// DNA engine for one population.
pub struct DnaEngineService<S: DnaStore = InMemoryDnaStore> {
    config: EngineConfig,
    registry: UniquenessRegistry<S>,
    metrics: Arc<EngineMetrics>,
}

impl DnaEngineService<InMemoryDnaStore> {
    /// Create a service backed by an in-memory store using the configured
    /// lock discipline.
    pub fn new(config: EngineConfig) -> Result<Self, DnaError> {
        config.validate()?;
        let registry = UniquenessRegistry::in_memory(&config.population, config.lock_discipline);
        Ok(Self::assemble(config, registry))
    }
}

impl<S: DnaStore> DnaEngineService<S> {
    /// Create a service over an injected store.
    pub fn with_store(config: EngineConfig, store: Arc<S>) -> Result<Self, DnaError> {
        config.validate()?;
        let registry = UniquenessRegistry::with_store(&config.population, store);
        Ok(Self::assemble(config, registry))
    }

    fn assemble(config: EngineConfig, registry: UniquenessRegistry<S>) -> Self {
        debug!(
            "[dna-engine] service ready for population {} (lock={}, packing={:?})",
            config.population, config.lock_discipline, config.schema_packing
        );
        Self {
            config,
            registry,
            metrics: Arc::new(EngineMetrics::new()),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shared registry handle.
    pub fn registry(&self) -> &UniquenessRegistry<S> {
        &self.registry
    }

    /// Counter snapshot.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn check_batch_size(&self, batch: &[Dna]) -> Result<(), DnaError> {
        if batch.len() > self.config.max_batch_size {
            return Err(DnaError::MalformedInput(format!(
                "batch of {} exceeds max_batch_size {}",
                batch.len(),
                self.config.max_batch_size
            )));
        }
        Ok(())
    }
}

impl<S: DnaStore> DnaEngineApi for DnaEngineService<S> {
    fn derive_dna(&self, item_id: ItemId, words: &[Word]) -> Dna {
        let dna = algorithms::derive_dna(item_id, words);
        self.metrics.record_derivation();
        debug!(
            "[dna-engine] derived {} for item {} from {} words",
            dna,
            item_id,
            words.len()
        );
        dna
    }

    fn derive_dna_from_strs(&self, item_id: &str, words: &[&str]) -> Result<Dna, DnaError> {
        let dna = algorithms::derive_dna_from_strs(item_id, words)?;
        self.metrics.record_derivation();
        Ok(dna)
    }

    fn resolve_attributes(
        &self,
        schema_hash: &SchemaHash,
        dna: &Dna,
        traits: &[TraitDefinition],
    ) -> Result<AttributeMap, DnaError> {
        let attributes =
            resolve_attributes_with(schema_hash, dna, traits, self.config.schema_packing)?;
        self.metrics.record_resolution();
        log_dna_event!(debug, self.config.population, "attributes resolved", dna = %dna, traits = traits.len());
        Ok(attributes)
    }

    fn resolve_schema(&self, schema: &TraitSchema, dna: &Dna) -> Result<AttributeMap, DnaError> {
        self.resolve_attributes(&schema.schema_hash(), dna, schema.traits())
    }

    fn contains(&self, dna: &Dna) -> bool {
        self.registry.contains(dna)
    }

    fn register(&self, dna: Dna) -> Result<Accepted, DnaError> {
        let result = self.registry.register(dna);
        self.metrics.record_registration(result.is_ok());
        result
    }

    fn register_batch(&self, batch: &[Dna]) -> Result<usize, DnaError> {
        self.check_batch_size(batch)?;
        let result = self.registry.register_batch(batch);
        match &result {
            Ok(_) => self.metrics.record_registrations(batch.len() as u64, true),
            Err(_) => self.metrics.record_registration(false),
        }
        result
    }

    fn check_batch_unique(&self, batch: &[Dna]) -> bool {
        let unique = self.registry.check_batch_unique(batch);
        self.metrics.record_batch_check(unique);
        unique
    }

    fn assign(
        &self,
        item_id: ItemId,
        words: &[Word],
        schema: &TraitSchema,
    ) -> Result<AssignedItem, DnaError> {
        let dna = self.derive_dna(item_id, words);
        self.register(dna)?;
        let attributes = self.resolve_schema(schema, &dna)?;
        Ok(AssignedItem {
            item_id,
            dna,
            attributes,
        })
    }

    fn registry_state(&self) -> RegistryState {
        self.registry.state()
    }
}
