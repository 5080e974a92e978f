//! In-Memory DNA Store
//!
//! Implements `DnaStore` over a `HashSet` guarded by the lock chosen at
//! construction time.

use parking_lot::{Mutex, RwLock};
use shared_types::Dna;
use std::collections::HashSet;
use tracing::trace;

use crate::algorithms::first_duplicate;
use crate::domain::{DnaError, LockDiscipline};
use crate::ports::outbound::DnaStore;

enum GuardedSet {
    Mutex(Mutex<HashSet<Dna>>),
    ReadWrite(RwLock<HashSet<Dna>>),
}

/// In-memory DNA set for one population.
pub struct InMemoryDnaStore {
    discipline: LockDiscipline,
    set: GuardedSet,
}

impl InMemoryDnaStore {
    /// Create an empty store with the given lock discipline.
    pub fn new(discipline: LockDiscipline) -> Self {
        let set = match discipline {
            LockDiscipline::Mutex => GuardedSet::Mutex(Mutex::new(HashSet::new())),
            LockDiscipline::ReadWrite => GuardedSet::ReadWrite(RwLock::new(HashSet::new())),
        };
        Self { discipline, set }
    }

    /// Lock discipline in use.
    pub fn discipline(&self) -> LockDiscipline {
        self.discipline
    }

    /// Registered DNA values, sorted.
    pub fn snapshot(&self) -> Vec<Dna> {
        let mut all: Vec<Dna> = self.read(|set| set.iter().copied().collect());
        all.sort();
        all
    }

    fn read<R>(&self, f: impl FnOnce(&HashSet<Dna>) -> R) -> R {
        match &self.set {
            GuardedSet::Mutex(lock) => f(&*lock.lock()),
            GuardedSet::ReadWrite(lock) => f(&*lock.read()),
        }
    }

    fn write<R>(&self, f: impl FnOnce(&mut HashSet<Dna>) -> R) -> R {
        match &self.set {
            GuardedSet::Mutex(lock) => f(&mut *lock.lock()),
            GuardedSet::ReadWrite(lock) => f(&mut *lock.write()),
        }
    }
}

impl Default for InMemoryDnaStore {
    fn default() -> Self {
        Self::new(LockDiscipline::default())
    }
}

impl DnaStore for InMemoryDnaStore {
    fn contains(&self, dna: &Dna) -> bool {
        self.read(|set| set.contains(dna))
    }

    fn insert_if_absent(&self, dna: Dna) -> Result<usize, DnaError> {
        self.write(|set| {
            if !set.insert(dna) {
                return Err(DnaError::DuplicateDna(dna));
            }
            trace!("[dna-engine] store size now {}", set.len());
            Ok(set.len())
        })
    }

    fn insert_all_if_absent(&self, batch: &[Dna]) -> Result<usize, DnaError> {
        if let Some(dup) = first_duplicate(batch) {
            return Err(DnaError::DuplicateDna(dup));
        }

        self.write(|set| {
            if let Some(existing) = batch.iter().find(|dna| set.contains(*dna)) {
                return Err(DnaError::DuplicateDna(*existing));
            }
            set.extend(batch.iter().copied());
            Ok(set.len())
        })
    }

    fn len(&self) -> usize {
        self.read(|set| set.len())
    }
}
