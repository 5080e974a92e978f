//! Counters for DNA engine operations
//!
//! ## Usage
//!
//! ```ignore
//! use dna_engine::metrics::EngineMetrics;
//!
//! let metrics = EngineMetrics::new();
//! metrics.record_registration(true);
//! assert_eq!(metrics.snapshot().registrations_accepted, 1);
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe operation counters.
#[derive(Default)]
pub struct EngineMetrics {
    /// DNA values derived
    pub dna_derived: AtomicU64,
    /// Attribute maps resolved
    pub attributes_resolved: AtomicU64,
    /// Registrations accepted
    pub registrations_accepted: AtomicU64,
    /// Registrations rejected as duplicates
    pub registrations_rejected: AtomicU64,
    /// Batch pre-checks performed
    pub batch_checks: AtomicU64,
    /// Batch pre-checks that found a repeat
    pub batch_checks_failed: AtomicU64,
}

impl EngineMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one DNA derivation
    pub fn record_derivation(&self) {
        self.dna_derived.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one attribute resolution
    pub fn record_resolution(&self) {
        self.attributes_resolved.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a registration outcome; batches count once per DNA
    pub fn record_registration(&self, accepted: bool) {
        self.record_registrations(1, accepted);
    }

    /// Record `count` registrations with the same outcome
    pub fn record_registrations(&self, count: u64, accepted: bool) {
        let counter = if accepted {
            &self.registrations_accepted
        } else {
            &self.registrations_rejected
        };
        counter.fetch_add(count, Ordering::Relaxed);
    }

    /// Record a batch pre-check
    pub fn record_batch_check(&self, unique: bool) {
        self.batch_checks.fetch_add(1, Ordering::Relaxed);
        if !unique {
            self.batch_checks_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            dna_derived: self.dna_derived.load(Ordering::Relaxed),
            attributes_resolved: self.attributes_resolved.load(Ordering::Relaxed),
            registrations_accepted: self.registrations_accepted.load(Ordering::Relaxed),
            registrations_rejected: self.registrations_rejected.load(Ordering::Relaxed),
            batch_checks: self.batch_checks.load(Ordering::Relaxed),
            batch_checks_failed: self.batch_checks_failed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub dna_derived: u64,
    pub attributes_resolved: u64,
    pub registrations_accepted: u64,
    pub registrations_rejected: u64,
    pub batch_checks: u64,
    pub batch_checks_failed: u64,
}

impl MetricsSnapshot {
    /// Fraction of registrations rejected as duplicates.
    pub fn rejection_rate(&self) -> f64 {
        let total = self.registrations_accepted + self.registrations_rejected;
        if total == 0 {
            0.0
        } else {
            self.registrations_rejected as f64 / total as f64
        }
    }
}
