//! # uint256 Parsing
//!
//! Item ids and words arrive from callers as text (decimal, or `0x` hex as
//! returned by JSON-RPC block fields). Anything that is not a non-negative
//! integer below 2^256 is rejected here.

use primitive_types::U256;

use crate::errors::TypeError;

/// Parse a decimal or `0x`-prefixed hex string into a uint256.
pub fn parse_uint256(input: &str) -> Result<U256, TypeError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(TypeError::Empty);
    }

    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return parse_hex(text, digits);
    }

    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(TypeError::NonNumeric(text.to_string()));
    }
    U256::from_dec_str(text).map_err(|_| TypeError::OutOfRange(text.to_string()))
}

/// Parse every element of `inputs`, failing on the first malformed one.
pub fn parse_words<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<U256>, TypeError> {
    inputs.iter().map(|s| parse_uint256(s.as_ref())).collect()
}

fn parse_hex(original: &str, digits: &str) -> Result<U256, TypeError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TypeError::NonNumeric(original.to_string()));
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() > 64 {
        return Err(TypeError::OutOfRange(original.to_string()));
    }
    if significant.is_empty() {
        return Ok(U256::zero());
    }

    U256::from_str_radix(significant, 16).map_err(|_| TypeError::NonNumeric(original.to_string()))
}
