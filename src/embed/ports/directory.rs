//! Agent lookup port keyed by embed token.

use crate::embed::domain::{EmbedAgent, EmbedToken};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for agent directory operations.
pub type AgentDirectoryResult<T> = Result<T, AgentDirectoryError>;

/// Read-only access to agents by embed token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentDirectory: Send + Sync {
    /// Finds the active agent owning `token`.
    ///
    /// Returns `None` when no agent has the token or the agent is not
    /// active.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDirectoryError`] when the backing store fails or holds
    /// a record that cannot be turned into an [`EmbedAgent`].
    async fn find_active_by_token(
        &self,
        token: &EmbedToken,
    ) -> AgentDirectoryResult<Option<EmbedAgent>>;
}

/// Errors returned by agent directory implementations.
#[derive(Debug, Clone, Error)]
pub enum AgentDirectoryError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentDirectoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
