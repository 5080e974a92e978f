//! # Uniqueness Registry
//!
//! Population-scoped set of accepted DNA values. `register` is the
//! enforcement point for uniqueness; `check_batch_unique` is only an
//! in-batch pre-check.

use dna_telemetry::log_dna_event;
use shared_types::Dna;
use std::sync::Arc;

use crate::adapters::InMemoryDnaStore;
use crate::algorithms::check_batch_unique;
use crate::domain::{Accepted, DnaError, LockDiscipline, RegistryState};
use crate::ports::outbound::DnaStore;

/// Uniqueness registry for one population.
///
/// Cloning shares the underlying store, so clones can be handed to other
/// threads and still serialize on the same lock.
pub struct UniquenessRegistry<S: DnaStore = InMemoryDnaStore> {
    population: String,
    store: Arc<S>,
}

impl<S: DnaStore> Clone for UniquenessRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            population: self.population.clone(),
            store: Arc::clone(&self.store),
        }
    }
}

impl UniquenessRegistry<InMemoryDnaStore> {
    /// Empty in-memory registry with the given lock discipline.
    pub fn in_memory(population: impl Into<String>, discipline: LockDiscipline) -> Self {
        Self::with_store(population, Arc::new(InMemoryDnaStore::new(discipline)))
    }
}

impl<S: DnaStore> UniquenessRegistry<S> {
    /// Registry over an injected store.
    pub fn with_store(population: impl Into<String>, store: Arc<S>) -> Self {
        Self {
            population: population.into(),
            store,
        }
    }

    /// Population label.
    pub fn population(&self) -> &str {
        &self.population
    }

    /// Underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// `Empty` until the first registration, `Populated` afterwards.
    pub fn state(&self) -> RegistryState {
        RegistryState::from_len(self.store.len())
    }

    /// Number of registered DNA values.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether `dna` is already registered. No side effect.
    pub fn contains(&self, dna: &Dna) -> bool {
        self.store.contains(dna)
    }

    /// Register one DNA. On `DuplicateDna` nothing changes.
    pub fn register(&self, dna: Dna) -> Result<Accepted, DnaError> {
        match self.store.insert_if_absent(dna) {
            Ok(population_size) => {
                log_dna_event!(debug, self.population, "DNA registered", dna = %dna, size = population_size);
                Ok(Accepted {
                    dna,
                    population_size,
                })
            }
            Err(err) => {
                log_dna_event!(warn, self.population, "DNA rejected", dna = %dna, error = %err);
                Err(err)
            }
        }
    }

    /// Register a whole batch atomically against both the batch itself and
    /// history. Returns the population size afterwards.
    pub fn register_batch(&self, batch: &[Dna]) -> Result<usize, DnaError> {
        match self.store.insert_all_if_absent(batch) {
            Ok(size) => {
                log_dna_event!(info, self.population, "DNA batch registered", count = batch.len(), size = size);
                Ok(size)
            }
            Err(err) => {
                log_dna_event!(warn, self.population, "DNA batch rejected", count = batch.len(), error = %err);
                Err(err)
            }
        }
    }

    /// Local pairwise-distinctness check. Does not consult or mutate the
    /// registry.
    pub fn check_batch_unique(&self, batch: &[Dna]) -> bool {
        check_batch_unique(batch)
    }
}
