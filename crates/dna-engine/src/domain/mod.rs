//! # Domain Module
//!
//! Core domain types for the DNA engine: trait schemas, attribute maps,
//! registry states and the invariants they must satisfy.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use value_objects::*;
