use serde::{Deserialize, Serialize};
use std::fmt;

use crate::query::RawQuery;
use crate::state::validated_recipient;

/// Side of the swap the user is actively typing into. The other side's
/// amount is derived from a quote
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Field {
    #[default]
    Input,
    Output,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// Swap-form state seeded from URL parameters on first render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapState {
    /// Amount as typed, forwarded as an opaque decimal string
    pub typed_value: Option<String>,
    pub independent_field: Field,
    /// Validated recipient address or domain-style name
    pub recipient: Option<String>,
}

fn parse_independent_field_url_parameter(value: Option<&str>) -> Field {
    // only the exact lowercase spelling flips the form
    match value {
        Some("output") => Field::Output,
        _ => Field::Input,
    }
}

pub fn query_parameters_to_swap_state(query: &RawQuery) -> SwapState {
    let typed_value = query
        .single("exactAmount")
        .filter(|value| !value.is_empty())
        .map(str::to_string);
    let independent_field = parse_independent_field_url_parameter(query.single("exactField"));
    let recipient = query.single("recipient").and_then(validated_recipient);

    SwapState {
        typed_value,
        independent_field,
        recipient,
    }
}
