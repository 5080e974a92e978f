//! # ABI Tight Packing
//!
//! Byte layout of Solidity's `abi.encodePacked` for the types the DNA engine
//! hashes.
//!
//! | Type | Encoding |
//! |------|----------|
//! | `uint256` | 32 bytes, big-endian |
//! | `uint256[]` | each element as 32 bytes, no length prefix |
//! | `bytes32` | raw 32 bytes |
//! | `string` / `bytes` | raw bytes, no length prefix, no padding |
//!
//! Dynamic values carry no length, so packing is not injective across
//! adjacent dynamic fields. Callers that need injectivity add their own
//! length words.

use primitive_types::U256;

use crate::hashing::{Hash, KeccakHasher};

/// One typed value in a packed tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackedValue<'a> {
    /// `uint256`
    Uint256(U256),
    /// `uint256[]`
    Uint256Array(&'a [U256]),
    /// `bytes32`
    Bytes32(&'a Hash),
    /// `string` (UTF-8)
    String(&'a str),
    /// `bytes`
    Bytes(&'a [u8]),
}

impl PackedValue<'_> {
    /// Number of bytes this value occupies in the packed encoding.
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Uint256(_) | Self::Bytes32(_) => 32,
            Self::Uint256Array(words) => words.len() * 32,
            Self::String(s) => s.len(),
            Self::Bytes(b) => b.len(),
        }
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            Self::Uint256(value) => push_word(out, value),
            Self::Uint256Array(words) => {
                for word in words.iter() {
                    push_word(out, word);
                }
            }
            Self::Bytes32(hash) => out.extend_from_slice(&hash[..]),
            Self::String(s) => out.extend_from_slice(s.as_bytes()),
            Self::Bytes(b) => out.extend_from_slice(b),
        }
    }
}

fn push_word(out: &mut Vec<u8>, value: &U256) {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    out.extend_from_slice(&word);
}

/// Incremental builder for a packed byte string.
///
/// ```ignore
/// let digest = PackedEncoder::new()
///     .uint256(item_id)
///     .uint256_array(&words)
///     .keccak256();
/// ```
#[derive(Clone, Debug, Default)]
pub struct PackedEncoder {
    buf: Vec<u8>,
}

impl PackedEncoder {
    /// Create an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append any packed value.
    pub fn push(&mut self, value: PackedValue<'_>) -> &mut Self {
        value.write_to(&mut self.buf);
        self
    }

    /// Append a `uint256`.
    pub fn uint256(&mut self, value: U256) -> &mut Self {
        self.push(PackedValue::Uint256(value))
    }

    /// Append a `uint256[]`.
    pub fn uint256_array(&mut self, words: &[U256]) -> &mut Self {
        self.push(PackedValue::Uint256Array(words))
    }

    /// Append a `bytes32`.
    pub fn bytes32(&mut self, hash: &Hash) -> &mut Self {
        self.push(PackedValue::Bytes32(hash))
    }

    /// Append a `string`.
    pub fn string(&mut self, s: &str) -> &mut Self {
        self.push(PackedValue::String(s))
    }

    /// Append dynamic `bytes`.
    pub fn bytes(&mut self, b: &[u8]) -> &mut Self {
        self.push(PackedValue::Bytes(b))
    }

    /// Packed bytes so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the encoder, returning the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Keccak-256 of the packed bytes.
    pub fn keccak256(&self) -> Hash {
        let mut hasher = KeccakHasher::new();
        hasher.update(&self.buf);
        hasher.finalize()
    }
}

/// Pack a tuple of values.
pub fn encode_packed(values: &[PackedValue<'_>]) -> Vec<u8> {
    let len = values.iter().map(PackedValue::encoded_len).sum();
    let mut encoder = PackedEncoder::with_capacity(len);
    for value in values {
        encoder.push(*value);
    }
    encoder.into_bytes()
}

/// `keccak256(abi.encodePacked(values...))`, the equivalent of ethers'
/// `solidityPackedKeccak256`.
pub fn solidity_packed_keccak256(values: &[PackedValue<'_>]) -> Hash {
    let mut hasher = KeccakHasher::new();
    hasher.update(&encode_packed(values));
    hasher.finalize()
}
