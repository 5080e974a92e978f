//! # Core Value Types
//!
//! Fixed-width digests and the numeric inputs they are derived from.
//!
//! ## Types
//!
//! - **Inputs**: `ItemId`, `Word`, `WordVector` (all uint256)
//! - **Digests**: `Dna`, `SchemaHash` (32-byte keccak-256 outputs)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::TypeError;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A raw 32-byte digest.
pub type Hash = [u8; 32];

/// Identifier of one item in a population (uint256).
pub type ItemId = U256;

/// One raw randomness / trait-seed input (uint256).
pub type Word = U256;

/// Ordered word inputs for one item. Immutable once used to derive a DNA.
pub type WordVector = Vec<Word>;

/// Width of every digest in bytes.
pub const HASH_LEN: usize = 32;

macro_rules! hash_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(pub Hash);

        impl $name {
            /// All-zero value.
            pub const ZERO: Self = Self([0u8; HASH_LEN]);

            /// Wrap raw digest bytes.
            pub const fn new(bytes: Hash) -> Self {
                Self(bytes)
            }

            /// Borrow the raw bytes.
            pub fn as_bytes(&self) -> &Hash {
                &self.0
            }

            /// Interpret the digest as a big-endian unsigned integer.
            pub fn to_u256(&self) -> U256 {
                U256::from_big_endian(&self.0)
            }

            /// Build from a uint256 (big-endian, 32 bytes).
            pub fn from_u256(value: U256) -> Self {
                let mut bytes = [0u8; HASH_LEN];
                value.to_big_endian(&mut bytes);
                Self(bytes)
            }

            /// Lowercase `0x`-prefixed hex text.
            pub fn to_hex(&self) -> String {
                format!("0x{}", hex::encode(self.0))
            }
        }

        impl From<Hash> for $name {
            fn from(bytes: Hash) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for Hash {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = TypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_hash_hex(s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

hash_newtype!(
    /// Content-addressed identity of one item's trait configuration.
    ///
    /// `Dna = keccak256(abi.encodePacked(uint256 itemId, uint256[] words))`.
    Dna
);

hash_newtype!(
    /// Identity of a versioned set of trait definitions.
    SchemaHash
);

/// Parse 64 hex nibbles, with or without a `0x` prefix.
fn parse_hash_hex(s: &str) -> Result<Hash, TypeError> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.len() != HASH_LEN * 2 {
        return Err(TypeError::InvalidHashLength {
            expected: HASH_LEN * 2,
            actual: digits.len(),
        });
    }

    let mut out = [0u8; HASH_LEN];
    hex::decode_to_slice(digits, &mut out)
        .map_err(|e| TypeError::InvalidHex(format!("{}: {}", s, e)))?;
    Ok(out)
}
