//! Query parameter extraction.
//!
//! The parameter bag is the key-value bundle handed to the launcher
//! collaborator. It reproduces the reference extraction rules exactly:
//!
//! - A query shorter than `k=v` (3 characters) is skipped wholesale.
//! - Tokens are split on `&`, then on `=`; only the first two `=`-delimited
//!   segments are kept, so a value may not itself contain `=`.
//! - Tokens without a `=` are skipped.
//! - Values are opaque: no percent-decoding, no type coercion.

use std::collections::HashMap;

/// Shortest query worth parsing (`k=v`).
const MIN_QUERY_LEN: usize = 3;

/// The key-value set extracted from a dispatch URL's query component.
///
/// Built once per dispatch call; ownership transfers to the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamBag {
    params: HashMap<String, String>,
}

impl ParamBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract parameters from a raw query string.
    pub fn from_query(query: &str) -> Self {
        let mut params = HashMap::new();
        if query.len() >= MIN_QUERY_LEN {
            for token in query.split('&') {
                let mut segments = token.splitn(3, '=');
                let (Some(key), Some(value)) = (segments.next(), segments.next()) else {
                    // No assignment in this token.
                    continue;
                };
                params.insert(key.to_owned(), value.to_owned());
            }
        }
        Self { params }
    }

    /// Look up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Number of extracted parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the bag holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the parameters as `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consume the bag, yielding the underlying map.
    pub fn into_inner(self) -> HashMap<String, String> {
        self.params
    }
}

impl FromIterator<(String, String)> for ParamBag {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ParamBag {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}
