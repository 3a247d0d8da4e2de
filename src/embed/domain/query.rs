//! Decoded query-string parameters.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use url::form_urlencoded;

/// Value of a query parameter. A key given more than once is kept as
/// [`QueryValue::Multiple`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// The key appeared once.
    Single(String),
    /// The key appeared several times, values in request order.
    Multiple(Vec<String>),
}

impl QueryValue {
    /// Returns the value when the key appeared exactly once.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(first) => {
                *self = Self::Multiple(vec![std::mem::take(first), value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }
}

/// Query-string map with case-sensitive keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, QueryValue>);

impl QueryParams {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let raw = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(raw.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Appends a value, turning a repeated key into [`QueryValue::Multiple`].
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let entry_value = value.into();
        match self.0.entry(key.into()) {
            Entry::Occupied(mut occupied) => occupied.get_mut().push(entry_value),
            Entry::Vacant(vacant) => {
                vacant.insert(QueryValue::Single(entry_value));
            }
        }
    }

    /// Returns the raw value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    /// Returns the value for a key when it appeared exactly once.
    #[must_use]
    pub fn single(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(QueryValue::as_single)
    }

    /// Returns `true` when no parameters are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}
