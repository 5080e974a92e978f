//! # Keccak-256 Hashing
//!
//! Ethereum's keccak256 (original Keccak padding, not NIST SHA3-256).

use sha3::{Digest, Keccak256};

/// Keccak-256 output (256-bit).
pub type Hash = [u8; 32];

/// Streaming Keccak-256 hasher.
pub struct KeccakHasher {
    inner: Keccak256,
}

impl KeccakHasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Keccak256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Hash {
        let result = self.inner.finalize();
        let mut output = [0u8; 32];
        output.copy_from_slice(&result);
        output
    }
}

impl Default for KeccakHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = KeccakHasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Hash the concatenation of multiple inputs.
pub fn keccak256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = KeccakHasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}
