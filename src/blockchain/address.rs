//! Address parsing and normalization.
//!
//! All addresses are compared in their parsed 20-byte form, so two spellings
//! of the same account (lowercase, uppercase, checksummed) are equal. The
//! canonical text form is the EIP-55 checksum.

use alloy::primitives::Address;
use thiserror::Error;

/// Reasons an address string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("'{0}' is not 40 hex digits")]
    Malformed(String),

    #[error("'{0}' has mixed case but fails the EIP-55 checksum")]
    BadChecksum(String),
}

/// Parse an address string into its normalized form.
///
/// Accepts an optional `0x` prefix. All-lowercase and all-uppercase inputs
/// are accepted as-is; mixed-case inputs must carry a valid checksum.
pub fn normalize_address(input: &str) -> Result<Address, AddressError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::Malformed(input.to_string()));
    }

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    let prefixed = format!("0x{}", digits);

    if has_lower && has_upper {
        Address::parse_checksummed(&prefixed, None)
            .map_err(|_| AddressError::BadChecksum(input.to_string()))
    } else {
        prefixed
            .parse()
            .map_err(|_| AddressError::Malformed(input.to_string()))
    }
}

/// Canonical (checksummed) text of an address.
pub fn checksummed(address: &Address) -> String {
    address.to_checksum(None)
}
