//! # Error Types
//!
//! Parsing errors for textual hash and uint256 inputs.

use thiserror::Error;

/// Errors raised while turning external text into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Input was empty or whitespace.
    #[error("Empty numeric input")]
    Empty,

    /// Input contained characters outside the accepted radix.
    #[error("Non-numeric input: {0:?}")]
    NonNumeric(String),

    /// Input does not fit in 256 bits.
    #[error("Value out of uint256 range: {0}")]
    OutOfRange(String),

    /// Hex digest had the wrong number of nibbles.
    #[error("Invalid hash length: expected {expected} hex chars, got {actual}")]
    InvalidHashLength { expected: usize, actual: usize },

    /// Hex digest contained invalid characters.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}
