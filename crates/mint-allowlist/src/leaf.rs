//! Address parsing and leaf hashing.
//!
//! A leaf is `keccak256(abi.encodePacked(address))`: the hash of the raw 20
//! address bytes, with no padding.

use alloy_primitives::{Address, B256};

use crate::{
    error::{AllowlistError, Result},
    hasher::Keccak256Hasher,
};

/// Hex digits in an address.
const ADDRESS_HEX_LEN: usize = 40;

/// Hex digits in a 32-byte hash.
const HASH_HEX_LEN: usize = 64;

/// Parses an address from hex text.
///
/// Accepts any case, an optional `0x` prefix and surrounding whitespace. The
/// checksum of mixed-case input is not enforced.
///
/// # Errors
/// Returns [`AllowlistError::InvalidAddress`] unless the input is exactly 40
/// hex digits.
pub fn parse_address(input: &str) -> Result<Address> {
    let digits = strip_hex_prefix(input.trim());
    if digits.len() != ADDRESS_HEX_LEN {
        return Err(AllowlistError::invalid_address(
            input,
            format!("expected {ADDRESS_HEX_LEN} hex chars, got {}", digits.len()),
        ));
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|e| AllowlistError::invalid_address(input, e.to_string()))?;
    Ok(Address::from(bytes))
}

/// Parses a 32-byte hash from hex text.
///
/// Same leniency as [`parse_address`]; the result is normalized so equal
/// hashes compare equal regardless of input case.
///
/// # Errors
/// Returns [`AllowlistError::InvalidHash`] unless the input is exactly 64 hex
/// digits.
pub fn parse_hash(input: &str) -> Result<B256> {
    let digits = strip_hex_prefix(input.trim());
    if digits.len() != HASH_HEX_LEN {
        return Err(AllowlistError::invalid_hash(
            input,
            format!("expected {HASH_HEX_LEN} hex chars, got {}", digits.len()),
        ));
    }

    let mut bytes = [0u8; 32];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|e| AllowlistError::invalid_hash(input, e.to_string()))?;
    Ok(B256::from(bytes))
}

/// Hashes a parsed address into its Merkle leaf.
pub fn address_leaf(address: &Address) -> B256 {
    Keccak256Hasher::hash(address.as_slice())
}

/// Parses `address` and hashes it into its Merkle leaf.
///
/// # Errors
/// Returns [`AllowlistError::InvalidAddress`] for malformed input.
pub fn compute_leaf(address: &str) -> Result<B256> {
    parse_address(address).map(|address| address_leaf(&address))
}

/// Formats a hash as `0x` followed by 64 lowercase hex digits.
pub fn format_hash_hex(hash: &B256) -> String {
    format!("{hash:#x}")
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    #[test]
    fn test_parse_address_with_prefix() {
        let parsed = parse_address("0x70997970C51812dc3A010C7d01b50e0d17dc79C8").unwrap();
        assert_eq!(parsed, address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"));
    }

    #[test]
    fn test_parse_address_without_prefix() {
        let parsed = parse_address("  70997970c51812dc3a010c7d01b50e0d17dc79c8 ").unwrap();
        assert_eq!(parsed, address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"));
    }

    #[test]
    fn test_parse_address_invalid_length() {
        let err = parse_address("0x1234").unwrap_err();
        assert!(matches!(err, AllowlistError::InvalidAddress { .. }));
    }

    #[test]
    fn test_parse_address_invalid_hex() {
        let err = parse_address("0xzz997970C51812dc3A010C7d01b50e0d17dc79C8").unwrap_err();
        assert!(matches!(err, AllowlistError::InvalidAddress { .. }));
    }

    #[test]
    fn test_compute_leaf_zero_address() {
        let leaf = compute_leaf("0x0000000000000000000000000000000000000000").unwrap();
        assert_eq!(leaf, b256!("0x5380c7b7ae81a58eb98d9c78de4a1fd7fd9535fc953ed2be602daaa41767312a"));
    }

    #[test]
    fn test_compute_leaf_matches_encode_packed() {
        let leaf = compute_leaf("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap();
        assert_eq!(leaf, b256!("0xe9707d0e6171f728f7473c24cc0432a9b07eaaf1efed6a137a4a8c12c79552d9"));
    }

    #[test]
    fn test_compute_leaf_ignores_case() {
        let mixed = compute_leaf("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266").unwrap();
        let lower = compute_leaf("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap();
        assert_eq!(mixed, lower);
    }

    #[test]
    fn test_parse_hash_normalizes_case() {
        let upper = parse_hash("0xE9707D0E6171F728F7473C24CC0432A9B07EAAF1EFED6A137A4A8C12C79552D9").unwrap();
        assert_eq!(
            format_hash_hex(&upper),
            "0xe9707d0e6171f728f7473c24cc0432a9b07eaaf1efed6a137a4a8c12c79552d9"
        );
    }

    #[test]
    fn test_parse_hash_rejects_short_input() {
        assert!(matches!(parse_hash("0x1234").unwrap_err(), AllowlistError::InvalidHash { .. }));
        assert!(matches!(parse_hash("0x").unwrap_err(), AllowlistError::InvalidHash { .. }));
    }
}
