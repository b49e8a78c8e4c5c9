//!
//! The state tester utilities.
//!

use std::str::FromStr;

///
/// Parses an unsigned integer quantity given either as a decimal string or as
/// hexadecimal, the two encodings fixtures use interchangeably.
///
pub fn parse_quantity(value: &str) -> anyhow::Result<u64> {
    let value = value.trim();
    if let Some(digits) = value.strip_prefix("0x") {
        return u64::from_str_radix(digits, 16)
            .map_err(|error| anyhow::anyhow!("invalid hexadecimal quantity `{value}`: {error}"));
    }
    value
        .parse::<u64>()
        .or_else(|_| u64::from_str_radix(value, 16))
        .map_err(|error| anyhow::anyhow!("invalid quantity `{value}`: {error}"))
}

///
/// Parses a 32-byte state hash as declared in a fixture expectation or
/// returned by the client.
///
pub fn parse_hash(value: &str) -> anyhow::Result<web3::types::H256> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    web3::types::H256::from_str(digits)
        .map_err(|error| anyhow::anyhow!("malformed state hash `{value}`: {error}"))
}
