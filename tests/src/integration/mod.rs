//! # Integration Tests
//!
//! End-to-end checks across shared-crypto, shared-types, dna-telemetry and
//! dna-engine.

pub mod concurrency;
pub mod flows;
