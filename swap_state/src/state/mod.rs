mod currency;
mod recipient;
mod swap;

use std::borrow::Cow;

pub use currency::*;
pub use recipient::*;
pub use swap::*;

/// Builds a shareable `?`-prefixed query string from swap-form state.
///
/// The inverse of the query parsers: parser-produced state round-trips
/// through this serialization. `exactField` is only meaningful together
/// with an amount, so both are omitted when no value was typed
pub fn serialize_swap_state_to_url_parameters(
    currency_state: &CurrencyState,
    swap_state: &SwapState,
) -> String {
    let mut params: Vec<(&str, Cow<str>)> = Vec::new();

    if let Some(input_currency) = &currency_state.input_currency_id {
        params.push(("inputCurrency", urlencoding::encode(input_currency)));
    }
    if let Some(output_currency) = &currency_state.output_currency_id {
        params.push(("outputCurrency", urlencoding::encode(output_currency)));
    }
    if let Some(typed_value) = &swap_state.typed_value {
        params.push(("exactAmount", urlencoding::encode(typed_value)));
        params.push((
            "exactField",
            Cow::Owned(swap_state.independent_field.to_string()),
        ));
    }
    if let Some(recipient) = &swap_state.recipient {
        params.push(("recipient", urlencoding::encode(recipient)));
    }

    let mut query = String::from("?");
    for (position, (key, value)) in params.iter().enumerate() {
        if position > 0 {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        query.push_str(value);
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_full_state() {
        let currency_state = CurrencyState {
            input_currency_id: Some("ETH".to_string()),
            output_currency_id: Some("0x6B175474E89094C44Da98b954EedeAC495271d0F".to_string()),
        };
        let swap_state = SwapState {
            typed_value: Some("20.5".to_string()),
            independent_field: Field::Output,
            recipient: Some("bob.argent.xyz".to_string()),
        };

        assert_eq!(
            serialize_swap_state_to_url_parameters(&currency_state, &swap_state),
            "?inputCurrency=ETH\
             &outputCurrency=0x6B175474E89094C44Da98b954EedeAC495271d0F\
             &exactAmount=20.5&exactField=output&recipient=bob.argent.xyz"
        );
    }

    #[test]
    fn test_serialize_omits_unset_fields() {
        let currency_state = CurrencyState {
            input_currency_id: Some("ETH".to_string()),
            output_currency_id: None,
        };
        let swap_state = SwapState {
            typed_value: None,
            independent_field: Field::Input,
            recipient: None,
        };

        assert_eq!(
            serialize_swap_state_to_url_parameters(&currency_state, &swap_state),
            "?inputCurrency=ETH"
        );
    }
}
