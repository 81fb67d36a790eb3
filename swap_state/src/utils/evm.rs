use crate::error::{Error, SwapStateResult};
use alloy_primitives::Address;
use error_stack::report;

/// Syntactic EVM address check: `0x` prefix followed by exactly 40 hex digits
pub fn is_evm_address(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.bytes().all(|byte| byte.is_ascii_hexdigit()),
        None => false,
    }
}

/// Normalizes an EVM address to its EIP-55 checksummed form
///
/// Throws if `value` is not a `0x`-prefixed 20-byte hex string
pub fn checksum_address(value: &str) -> SwapStateResult<String> {
    if !is_evm_address(value) {
        return Err(report!(Error::AddressError(format!(
            "Invalid EVM address: {value}"
        ))));
    }
    let address: Address = value.parse().map_err(|error| {
        report!(Error::AddressError(format!(
            "Failed to parse EVM address {value}: {error}"
        )))
    })?;

    Ok(address.to_checksum(None))
}
