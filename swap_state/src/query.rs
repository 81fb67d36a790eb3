use std::collections::HashMap;

/// Decoded value of a query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    /// Parameter appeared more than once. Representable so nothing is
    /// silently dropped, but state parsers treat repeated values as unset
    Repeated(Vec<String>),
}

impl QueryValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value),
            QueryValue::Repeated(_) => None,
        }
    }
}

/// Flat mapping of decoded URL query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    params: HashMap<String, QueryValue>,
}

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a raw query string into a parameter mapping.
    ///
    /// Accepts an optional leading `?`. Pairs are split at the first `=`,
    /// a key without `=` maps to the empty string. Percent escapes that
    /// do not decode to valid UTF-8 are kept as raw text
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut parsed = Self::new();
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, value),
                None => (pair, ""),
            };
            parsed.insert(percent_decode(key), percent_decode(value));
        }

        parsed
    }

    /// Inserts a decoded parameter, accumulating duplicate keys into
    /// [`QueryValue::Repeated`]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.params.remove(&key) {
            None => {
                self.params.insert(key, QueryValue::Single(value));
            }
            Some(QueryValue::Single(existing)) => {
                self.params
                    .insert(key, QueryValue::Repeated(vec![existing, value]));
            }
            Some(QueryValue::Repeated(mut values)) => {
                values.push(value);
                self.params.insert(key, QueryValue::Repeated(values));
            }
        }
    }

    /// Parameter value, only if the parameter appeared exactly once
    pub fn single(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(QueryValue::as_single)
    }
}

fn percent_decode(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(error) => {
            tracing::trace!("Keeping raw query text, percent decoding failed: {error}");
            value.to_string()
        }
    }
}
