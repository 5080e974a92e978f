//! # Domain Value Objects
//!
//! Immutable value types for the uniqueness registry and resolver options.

use serde::{Deserialize, Serialize};
use shared_types::Dna;
use std::fmt;
use std::str::FromStr;

use super::errors::DnaError;

/// Uniqueness registry state machine.
///
/// `Empty` is initial; the first accepted DNA moves it to `Populated`. There
/// is no terminal state and no transition back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RegistryState {
    /// No DNA registered yet.
    #[default]
    Empty,
    /// At least one DNA registered.
    Populated,
}

impl RegistryState {
    /// State implied by a population size.
    pub fn from_len(len: usize) -> Self {
        if len == 0 {
            Self::Empty
        } else {
            Self::Populated
        }
    }

    /// Check if transition to next state is valid.
    pub fn can_transition_to(&self, next: RegistryState) -> bool {
        match (self, next) {
            (Self::Empty, Self::Populated) => true,
            (Self::Populated, Self::Populated) => true,
            (Self::Empty, Self::Empty) => true,
            (Self::Populated, Self::Empty) => false,
        }
    }
}

/// Successful registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accepted {
    /// The registered DNA.
    pub dna: Dna,
    /// Population size after insertion.
    pub population_size: usize,
}

/// Lock used by the in-memory registry store around check-then-insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LockDiscipline {
    /// Single mutex for reads and writes.
    #[default]
    Mutex,
    /// Reader-writer lock: `contains` runs in parallel, writes are exclusive.
    ReadWrite,
}

impl FromStr for LockDiscipline {
    type Err = DnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mutex" => Ok(Self::Mutex),
            "rwlock" | "read-write" | "readwrite" => Ok(Self::ReadWrite),
            other => Err(DnaError::Config(format!("unknown lock discipline: {other}"))),
        }
    }
}

impl fmt::Display for LockDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mutex => f.write_str("mutex"),
            Self::ReadWrite => f.write_str("rwlock"),
        }
    }
}

/// How the schema hash enters the trait seed.
///
/// `Bytes32` is the on-chain layout. `HexString` packs the schema hash as its
/// `0x`-prefixed lowercase hex text with `string` type, which is what the
/// off-chain JSON helper historically hashed; it is kept to reproduce JSON
/// produced by that helper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaHashPacking {
    /// `bytes32 schemaHash`
    #[default]
    Bytes32,
    /// `string schemaHashHex`
    HexString,
}

impl FromStr for SchemaHashPacking {
    type Err = DnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bytes32" => Ok(Self::Bytes32),
            "hex-string" | "hexstring" | "string" => Ok(Self::HexString),
            other => Err(DnaError::Config(format!("unknown schema packing: {other}"))),
        }
    }
}
