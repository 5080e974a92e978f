//! # Concurrency Tests
//!
//! Racing registrations against one registry. For every lock discipline,
//! N threads registering the same DNA must yield exactly one `Accepted`
//! and N-1 `DuplicateDna`, and the registry must end with one entry.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Barrier};
    use std::thread;

    use rayon::prelude::*;

    use dna_engine::{
        DnaEngineApi, DnaEngineService, DnaError, EngineConfig, LockDiscipline,
        UniquenessRegistry,
    };
    use shared_types::{Dna, U256};

    const THREADS: usize = 16;

    fn race_same_dna(discipline: LockDiscipline) {
        let registry = UniquenessRegistry::in_memory("race", discipline);
        let dna = dna_engine::derive_dna(U256::from(1u64), &[U256::from(99u64)]);
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let registry = registry.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.register(dna)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let accepted = results.iter().filter(|r| r.is_ok()).count();
        let duplicates = results
            .iter()
            .filter(|r| matches!(r, Err(DnaError::DuplicateDna(d)) if *d == dna))
            .count();

        assert_eq!(accepted, 1, "{discipline}: exactly one winner");
        assert_eq!(duplicates, THREADS - 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_race_same_dna_mutex() {
        race_same_dna(LockDiscipline::Mutex);
    }

    #[test]
    fn test_race_same_dna_rwlock() {
        race_same_dna(LockDiscipline::ReadWrite);
    }

    #[test]
    fn test_rayon_distinct_dnas_all_accepted() {
        for discipline in [LockDiscipline::Mutex, LockDiscipline::ReadWrite] {
            let svc = DnaEngineService::new(
                EngineConfig::new("rayon").with_lock_discipline(discipline),
            )
            .unwrap();

            let accepted = (0..1_000u64)
                .into_par_iter()
                .map(|i| svc.derive_dna(U256::from(i), &[U256::from(i * 31)]))
                .filter(|dna| svc.register(*dna).is_ok())
                .count();

            assert_eq!(accepted, 1_000);
            assert_eq!(svc.metrics().registrations_accepted, 1_000);
        }
    }

    #[test]
    fn test_rayon_overlapping_dnas_each_accepted_once() {
        let svc = DnaEngineService::new(
            EngineConfig::new("overlap").with_lock_discipline(LockDiscipline::ReadWrite),
        )
        .unwrap();

        // 64 distinct DNAs, each submitted 8 times.
        let accepted = (0..512u64)
            .into_par_iter()
            .map(|i| Dna::from_u256(U256::from(i % 64)))
            .filter(|dna| svc.register(*dna).is_ok())
            .count();

        assert_eq!(accepted, 64);
        assert_eq!(svc.registry().len(), 64);
        assert_eq!(svc.metrics().registrations_rejected, 512 - 64);
    }

    #[test]
    fn test_racing_batches_are_all_or_nothing() {
        let registry = UniquenessRegistry::in_memory("batches", LockDiscipline::Mutex);
        let shared = Dna::new([0xAB; 32]);
        let barrier = Arc::new(Barrier::new(4));

        let handles: Vec<_> = (0..4u8)
            .map(|t| {
                let registry = registry.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let batch = vec![shared, Dna::new([t; 32])];
                    barrier.wait();
                    registry.register_batch(&batch)
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();

        assert_eq!(winners, 1);
        // Winner's two entries only; losers left nothing behind.
        assert_eq!(registry.len(), 2);
    }
}
