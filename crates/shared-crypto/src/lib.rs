//! # Shared Crypto - Hash Service
//!
//! **Status:** Stable
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 (pre-NIST padding) | DNA, schema and trait seeds |
//! | `packed` | Solidity `abi.encodePacked` | Hash input layout |
//!
//! ## Interoperability
//!
//! On-chain verifiers recompute `keccak256(abi.encodePacked(...))` over the
//! same values. Every width and ordering rule in `packed` mirrors Solidity's
//! non-standard packed mode; changing one breaks verification.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;
pub mod packed;

// Re-exports
pub use hashing::{keccak256, keccak256_many, Hash, KeccakHasher};
pub use packed::{encode_packed, solidity_packed_keccak256, PackedEncoder, PackedValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
