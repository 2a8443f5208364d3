//! Per-call placeholder values

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping of placeholder names to the strings substituted for them.
///
/// # Example
///
/// ```rust
/// use stepchain::prompt::PlaceholderBindings;
///
/// let values = PlaceholderBindings::new()
///     .with("question", "Q")
///     .with("explanation", "E");
/// assert_eq!(values.get("question"), Some("Q"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderBindings {
    values: HashMap<String, String>,
}

impl PlaceholderBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a binding, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `self` overlaid with `other`; entries in `other` win.
    pub fn merged(&self, other: &PlaceholderBindings) -> PlaceholderBindings {
        let mut values = self.values.clone();
        values.extend(other.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for PlaceholderBindings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for PlaceholderBindings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for PlaceholderBindings {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K, V> Extend<(K, V)> for PlaceholderBindings
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
