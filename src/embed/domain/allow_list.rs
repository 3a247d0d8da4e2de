//! Domain allow-list normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

const SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];

/// A configured domain in comparable form.
///
/// Lowercase, without scheme, path or trailing slash. A port is kept when
/// the operator wrote one (`localhost:8080`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedDomain(String);

impl NormalizedDomain {
    /// Normalizes a single raw allow-list entry.
    ///
    /// Returns `None` when nothing remains after stripping, e.g. for a blank
    /// entry or a bare `https://`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase();
        let without_scheme = SCHEME_PREFIXES
            .iter()
            .find_map(|prefix| lowered.strip_prefix(*prefix))
            .unwrap_or(&lowered);
        let authority = without_scheme.split('/').next().unwrap_or_default();
        if authority.is_empty() {
            return None;
        }
        Some(Self(authority.to_owned()))
    }

    /// Returns the normalized domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedDomain {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for NormalizedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of domains permitted to embed an agent.
///
/// An empty list means no restriction is configured. Duplicates are kept;
/// matching is existential so they have no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList(Vec<NormalizedDomain>);

impl AllowList {
    /// Parses a raw comma-separated allow-list.
    ///
    /// Absent input and input with no usable entries both yield an empty,
    /// unrestricted list.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::default, |value| {
            Self(value.split(',').filter_map(NormalizedDomain::parse).collect())
        })
    }

    /// Returns `true` when no domain restriction is in effect.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedDomain> {
        self.0.iter()
    }
}

impl FromIterator<NormalizedDomain> for AllowList {
    fn from_iter<I: IntoIterator<Item = NormalizedDomain>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AllowList {
    type Item = &'a NormalizedDomain;
    type IntoIter = std::slice::Iter<'a, NormalizedDomain>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
