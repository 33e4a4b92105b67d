//! Query parameter set
//!
//! One string value per key. When a key is supplied more than once the first
//! value wins; there is no multi-value support.

use std::collections::{BTreeMap, HashMap};

/// Owner exact-match filter key
pub const OWNER: &str = "owner";
/// Category exact-match filter key
pub const CATEGORY: &str = "category";
/// Status filter key
pub const STATUS: &str = "status";
/// Body substring filter key
pub const CONTAINS: &str = "contains";
/// Result size cap key
pub const LIMIT: &str = "limit";
/// Sort field key
pub const ORDER_BY: &str = "orderBy";

/// Parsed query parameters.
///
/// Unknown keys are kept but never consulted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, String>,
}

impl QueryParams {
    /// Creates an empty parameter set (no constraints)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a parameter set from key/value pairs in arrival order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.insert_first(key.into(), value.into());
        }
        params
    }

    /// Builds a parameter set from a multi-valued map, taking the first
    /// value of each key. Keys with no values are dropped.
    pub fn from_multi_map(map: &HashMap<String, Vec<String>>) -> Self {
        let mut params = Self::new();
        for (key, values) in map {
            if let Some(first) = values.first() {
                params.insert_first(key.clone(), first.clone());
            }
        }
        params
    }

    /// Adds a parameter unless the key is already set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_first(key.into(), value.into());
        self
    }

    fn insert_first(&mut self, key: String, value: String) {
        self.values.entry(key).or_insert(value);
    }

    /// Returns the value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns true if the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameters were supplied
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the set as `k=v&k=v` in key order, for logging.
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
