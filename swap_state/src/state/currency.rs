use serde::{Deserialize, Serialize};

use crate::query::RawQuery;
use crate::utils::evm::checksum_address;

/// Identifier of the chain's base currency, as opposed to token addresses
pub const NATIVE_CURRENCY_ID: &str = "ETH";

/// Currency selection seeded into the swap form on first render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyState {
    /// Native currency symbol or checksummed token address
    pub input_currency_id: Option<String>,
    /// Native currency symbol or checksummed token address
    pub output_currency_id: Option<String>,
}

/// Normalizes one currency parameter: the native symbol in any casing
/// becomes canonical, token addresses become their checksummed form,
/// anything else is unset
fn parse_currency_from_url_parameter(value: Option<&str>) -> Option<String> {
    let value = value?;
    if value.is_empty() {
        return None;
    }
    if value.eq_ignore_ascii_case(NATIVE_CURRENCY_ID) {
        return Some(NATIVE_CURRENCY_ID.to_string());
    }
    match checksum_address(value) {
        Ok(address) => Some(address),
        Err(error) => {
            tracing::debug!("Discarding currency query parameter: {error}");
            None
        }
    }
}

/// Currency parameter under its canonical key, falling back to the
/// all-lowercase spelling used by some deep links
fn currency_param<'a>(query: &'a RawQuery, key: &str, lowercase_key: &str) -> Option<&'a str> {
    query.single(key).or_else(|| query.single(lowercase_key))
}

pub fn query_parameters_to_currency_state(query: &RawQuery) -> CurrencyState {
    let mut input_currency =
        parse_currency_from_url_parameter(currency_param(query, "inputCurrency", "inputcurrency"));
    let mut output_currency = parse_currency_from_url_parameter(currency_param(
        query,
        "outputCurrency",
        "outputcurrency",
    ));

    if input_currency == output_currency {
        // identical selections collapse to the input side
        output_currency = None;
    }
    if input_currency.is_none() && output_currency.as_deref() != Some(NATIVE_CURRENCY_ID) {
        // the form always opens with something selected: the native
        // currency claims the input side unless the output side has it
        input_currency = Some(NATIVE_CURRENCY_ID.to_string());
    }

    CurrencyState {
        input_currency_id: input_currency,
        output_currency_id: output_currency,
    }
}
