//! Identifier types for the embed domain.

use super::EmbedDomainError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of digest bytes kept in a token fingerprint.
const FINGERPRINT_BYTES: usize = 6;

/// Opaque agent identifier as stored by the agent directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Creates an agent identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedDomainError::EmptyAgentId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, EmbedDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(EmbedDomainError::EmptyAgentId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque embed token addressing an agent's public widget page.
///
/// The token doubles as a lookup key and as a credential handed to the
/// widget, so `Debug` output only carries its fingerprint.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbedToken(String);

impl EmbedToken {
    /// Creates an embed token from its raw value.
    ///
    /// The value is kept verbatim; only blank input is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedDomainError::EmptyEmbedToken`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, EmbedDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(EmbedDomainError::EmptyEmbedToken);
        }
        Ok(Self(raw))
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a short, non-reversible fingerprint for log correlation.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        digest
            .iter()
            .take(FINGERPRINT_BYTES)
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}

impl AsRef<str> for EmbedToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for EmbedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EmbedToken")
            .field(&self.fingerprint())
            .finish()
    }
}
