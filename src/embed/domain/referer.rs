//! Parsed `Referer` header identity.

use super::{NormalizedDomain, RefererParseError};
use url::Url;

/// Host identity extracted from a `Referer` header.
///
/// `host` carries the port when the URL names a non-default one; `hostname`
/// never does. Both are lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefererIdentity {
    host: String,
    hostname: String,
}

impl RefererIdentity {
    /// Parses a referer header value as an absolute URL.
    ///
    /// URLs without a host (`about:blank`, `data:`) parse successfully but
    /// yield an empty identity that matches no domain.
    ///
    /// # Errors
    ///
    /// Returns [`RefererParseError`] when the value is not a well-formed
    /// absolute URL.
    pub fn parse(referer: &str) -> Result<Self, RefererParseError> {
        let url = Url::parse(referer).map_err(|error| RefererParseError {
            referer: referer.to_owned(),
            reason: error.to_string(),
        })?;
        let hostname = url.host_str().unwrap_or_default().to_lowercase();
        let host = url
            .port()
            .map_or_else(|| hostname.clone(), |port| format!("{hostname}:{port}"));
        Ok(Self { host, hostname })
    }

    /// Returns the host, including a non-default port.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the hostname without port.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Checks this identity against a single allow-list entry.
    ///
    /// Matches on exact host, exact hostname, or a subdomain of the entry
    /// through either form. Subdomain checks require a `.` label boundary, so
    /// `notexample.com` never matches `example.com`.
    #[must_use]
    pub fn matches(&self, domain: &NormalizedDomain) -> bool {
        let entry = domain.as_str();
        self.host == entry
            || self.hostname == entry
            || is_subdomain_of(&self.hostname, entry)
            || is_subdomain_of(&self.host, entry)
    }
}

fn is_subdomain_of(candidate: &str, domain: &str) -> bool {
    candidate
        .strip_suffix(domain)
        .is_some_and(|prefix| prefix.ends_with('.'))
}
