//! Error types for embed domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing embed domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmbedDomainError {
    /// The agent identifier is empty after trimming.
    #[error("agent id must not be empty")]
    EmptyAgentId,

    /// The embed token is empty after trimming.
    #[error("embed token must not be empty")]
    EmptyEmbedToken,
}

/// Error returned while parsing agent status from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent status: {0}")]
pub struct ParseAgentStatusError(pub String);

/// A `Referer` header value that is not an absolute URL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("referer '{referer}' is not a valid URL: {reason}")]
pub struct RefererParseError {
    /// The header value as received.
    pub referer: String,
    /// Parser diagnostic.
    pub reason: String,
}
