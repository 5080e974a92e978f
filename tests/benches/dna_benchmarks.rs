//! # DNA Engine Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | `derive_dna` (8 words) | < 5µs |
//! | `resolve_attributes` (16 traits) | < 50µs |
//! | `register` (uncontended) | < 2µs |
//! | `check_batch_unique` (10 000) | < 5ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dna_engine::{
    check_batch_unique, derive_dna, resolve_attributes, LockDiscipline, TraitDefinition,
    UniquenessRegistry,
};
use rand::Rng;
use shared_crypto::keccak256;
use shared_types::{Dna, SchemaHash, U256};
use std::time::Duration;

fn random_words(n: usize) -> Vec<U256> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| U256::from(rng.gen::<u64>())).collect()
}

fn bench_derive_dna(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive-dna");

    for size in [0usize, 3, 8, 32] {
        let words = random_words(size);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("words", size), &words, |b, words| {
            b.iter(|| black_box(derive_dna(U256::from(42u64), words)))
        });
    }

    group.finish();
}

fn bench_resolve_attributes(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve-attributes");
    let schema_hash = SchemaHash::new(keccak256(b"bench-schema"));
    let dna = derive_dna(U256::one(), &random_words(4));

    for count in [4usize, 16, 64] {
        let traits: Vec<TraitDefinition> = (0..count)
            .map(|i| TraitDefinition::new(format!("trait_{i}"), (i as u64) + 2))
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("traits", count), &traits, |b, traits| {
            b.iter(|| black_box(resolve_attributes(&schema_hash, &dna, traits)))
        });
    }

    group.finish();
}

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");
    group.measurement_time(Duration::from_secs(5));

    for discipline in [LockDiscipline::Mutex, LockDiscipline::ReadWrite] {
        let registry = UniquenessRegistry::in_memory("bench", discipline);
        let mut counter = 0u64;
        group.bench_function(BenchmarkId::new("uncontended", discipline), |b| {
            b.iter(|| {
                counter += 1;
                black_box(registry.register(Dna::from_u256(U256::from(counter))))
            })
        });
    }

    group.finish();
}

fn bench_batch_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("check-batch-unique");

    for size in [100usize, 1_000, 10_000] {
        let batch: Vec<Dna> = (0..size as u64)
            .map(|i| Dna::from_u256(U256::from(i)))
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("distinct", size), &batch, |b, batch| {
            b.iter(|| black_box(check_batch_unique(batch)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_derive_dna,
    bench_resolve_attributes,
    bench_register,
    bench_batch_unique
);
criterion_main!(benches);
