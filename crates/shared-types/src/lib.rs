//! # Shared Types Crate
//!
//! Value types shared by the hashing and DNA engine crates.
//!
//! ## Design Principles
//!
//! - **Opaque digests**: `Dna` and `SchemaHash` are 32-byte newtypes; outside
//!   the hash domain they are compared and stored as raw bytes only.
//! - **Reject before hashing**: textual uint256 inputs are parsed here, so a
//!   malformed item id or word never reaches the hasher.

pub mod entities;
pub mod errors;
pub mod numeric;

pub use entities::*;
pub use errors::*;
pub use numeric::*;
