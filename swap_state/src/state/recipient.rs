use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::evm::is_evm_address;

lazy_static! {
    /// Domain-style recipient names: one or more hyphen-tolerant
    /// alphanumeric labels ending in an alphabetic top-level label,
    /// e.g. `vitalik.eth` or `bob.argent.xyz`. No provider allow-list
    static ref RECIPIENT_NAME_REGEX: Regex = Regex::new(
        r"^(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9])\.)+[a-zA-Z]{2,}$"
    )
    .expect("recipient name pattern compiles");
}

/// Accepts a recipient verbatim if it is a syntactically valid EVM
/// address or a domain-style human-readable name, `None` otherwise
pub fn validated_recipient(value: &str) -> Option<String> {
    if is_evm_address(value) || RECIPIENT_NAME_REGEX.is_match(value) {
        return Some(value.to_string());
    }
    None
}
