//! Text token to `BitWord32` conversion.
//!
//! Binary tokens are read as an unsigned number and right-aligned into the
//! word: `"1"` is `0x00000001`, not a pattern with the MSB set. Short binary
//! tokens are never left-aligned.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder::BitWord32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    #[default]
    Hex,
    Binary,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    #[error("invalid binary: {0}")]
    InvalidBinary(String),
}

pub fn normalize(token: &str, mode: InputMode) -> Result<BitWord32, NormalizeError> {
    match mode {
        InputMode::Hex => normalize_hex(token),
        InputMode::Binary => normalize_binary(token),
    }
}

/// Accepts an optional `0x`/`0X` prefix and up to 8 significant hex digits.
pub fn normalize_hex(token: &str) -> Result<BitWord32, NormalizeError> {
    let tok = token.trim();
    let digits = tok.strip_prefix("0x").or_else(|| tok.strip_prefix("0X")).unwrap_or(tok);
    let reject = || {
        debug!(token, "rejected hex token");
        NormalizeError::InvalidHex(token.to_string())
    };
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(reject());
    }
    let padded = format!("{digits:0>8}");
    u32::from_str_radix(&padded, 16).map(BitWord32::new).map_err(|_| reject())
}

pub fn normalize_binary(token: &str) -> Result<BitWord32, NormalizeError> {
    let tok = token.trim();
    let reject = || {
        debug!(token, "rejected binary token");
        NormalizeError::InvalidBinary(token.to_string())
    };
    if tok.is_empty() || !tok.chars().all(|c| c == '0' || c == '1') {
        return Err(reject());
    }
    // Overflow past 32 bits is the only parse failure left.
    u32::from_str_radix(tok, 2).map(BitWord32::new).map_err(|_| reject())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_prefix_and_padding() {
        assert_eq!(normalize_hex("0x8B020020").unwrap().value(), 0x8B02_0020);
        assert_eq!(normalize_hex("0X8b020020").unwrap().value(), 0x8B02_0020);
        assert_eq!(normalize_hex("1f").unwrap().value(), 0x1F);
        assert_eq!(normalize_hex("  91002C27\n").unwrap().value(), 0x9100_2C27);
        assert_eq!(normalize_hex("0x").unwrap().value(), 0);
    }

    #[test]
    fn hex_rejects_garbage_and_overflow() {
        assert_eq!(normalize_hex("xyz"), Err(NormalizeError::InvalidHex("xyz".into())));
        assert!(normalize_hex("+1").is_err());
        assert!(normalize_hex("0x0x12").is_err());
        assert!(normalize_hex("123456789").is_err());
        assert_eq!(normalize_hex("0000000012345678").unwrap().value(), 0x1234_5678);
    }

    #[test]
    fn binary_is_right_aligned() {
        assert_eq!(normalize_binary("1").unwrap().value(), 1);
        assert_eq!(normalize_binary("100000000").unwrap().value(), 0x100);
        let full = "10001011000000100000000000100000";
        assert_eq!(normalize_binary(full).unwrap().value(), 0x8B02_0020);
    }

    #[test]
    fn binary_rejects_non_bits() {
        assert_eq!(normalize_binary("102"), Err(NormalizeError::InvalidBinary("102".into())));
        assert!(normalize_binary("").is_err());
        assert!(normalize_binary("0b101").is_err());
        assert!(normalize_binary(&"1".repeat(33)).is_err());
    }

    #[test]
    fn mode_dispatch() {
        assert_eq!(normalize("10", InputMode::Hex).unwrap().value(), 0x10);
        assert_eq!(normalize("10", InputMode::Binary).unwrap().value(), 2);
    }
}
