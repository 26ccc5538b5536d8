//! Filter criteria built from comma-separated CLI input

use std::fmt;

use crate::error::{FilterError, FilterResult};

/// Separator between keys (and between values) on the command line
pub const LIST_SEPARATOR: char = ',';

/// A single attribute constraint: `key` must list `value` in its `"Value"` array
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Criterion {
    pub key: String,
    pub value: String,
}

impl Criterion {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Criterion {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Ordered set of criteria; every one must hold for a record to match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria(Vec<Criterion>);

impl Criteria {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self(criteria)
    }

    /// Pair comma-separated keys and values by position.
    ///
    /// Tokens are trimmed. An empty string is one empty token, so `""` and
    /// `""` give the single criterion `("", "")`.
    pub fn from_comma_separated(keys: &str, values: &str) -> FilterResult<Self> {
        let keys = split_list(keys);
        let values = split_list(values);

        if keys.len() != values.len() {
            return Err(FilterError::length_mismatch(keys.len(), values.len()));
        }

        Ok(Self(
            keys.into_iter()
                .zip(values)
                .map(Criterion::from)
                .collect(),
        ))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Criterion] {
        &self.0
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn split_list(list: &str) -> Vec<String> {
    list.split(LIST_SEPARATOR)
        .map(|token| token.trim().to_string())
        .collect()
}
