//! Referer authorization against a domain allow-list.

use super::{AllowList, NormalizedDomain, RefererIdentity};

/// Why a referer was or was not authorized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefererVerdict {
    /// No allow-list is configured; every referer passes.
    Unrestricted,
    /// The referer matched this allow-list entry.
    Matched(NormalizedDomain),
    /// An allow-list is in effect but the request carried no referer.
    MissingReferer,
    /// The referer header could not be parsed as a URL.
    MalformedReferer,
    /// The referer parsed but matched no entry.
    NoMatch,
}

impl RefererVerdict {
    /// Returns `true` when the embed may be served.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Unrestricted | Self::Matched(_))
    }
}

/// Evaluates a referer against an allow-list.
///
/// An empty allow-list short-circuits to [`RefererVerdict::Unrestricted`]
/// without looking at the referer. An empty header value counts as missing.
/// A malformed referer fails closed and is logged.
#[must_use]
pub fn evaluate(referer: Option<&str>, allow_list: &AllowList) -> RefererVerdict {
    if allow_list.is_unrestricted() {
        return RefererVerdict::Unrestricted;
    }
    let Some(raw) = referer.filter(|value| !value.is_empty()) else {
        return RefererVerdict::MissingReferer;
    };
    match RefererIdentity::parse(raw) {
        Ok(identity) => allow_list
            .iter()
            .find(|domain| identity.matches(domain))
            .map_or(RefererVerdict::NoMatch, |domain| {
                RefererVerdict::Matched(domain.clone())
            }),
        Err(error) => {
            tracing::warn!(
                referer = %error.referer,
                reason = %error.reason,
                "error parsing referer URL"
            );
            RefererVerdict::MalformedReferer
        }
    }
}

/// Returns `true` when `referer` may embed under `allow_list`.
#[must_use]
pub fn is_authorized(referer: Option<&str>, allow_list: &AllowList) -> bool {
    evaluate(referer, allow_list).is_allowed()
}
