//! # Ports Module
//!
//! Hexagonal architecture ports: the engine API callers drive, and the
//! store / chain-context dependencies the engine is driven against.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
