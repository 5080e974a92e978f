//! # DNA Engine Test Suite
//!
//! Cross-crate tests for the DNA engine.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # Derive → register → resolve pipelines, fixtures
//!     └── concurrency.rs  # Racing registrations under both lock disciplines
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dna-tests
//! cargo test -p dna-tests integration::concurrency::
//!
//! # Benchmarks
//! cargo bench -p dna-tests
//! ```

#![allow(dead_code)]

pub mod integration;
