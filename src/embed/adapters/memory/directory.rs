//! In-memory agent directory keyed by embed token.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::embed::{
    domain::{EmbedAgent, EmbedToken},
    ports::{AgentDirectory, AgentDirectoryError, AgentDirectoryResult},
};

/// Thread-safe in-memory agent directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentDirectory {
    agents: Arc<RwLock<HashMap<EmbedToken, EmbedAgent>>>,
}

impl InMemoryAgentDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an agent under its embed token, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDirectoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn insert(&self, agent: EmbedAgent) -> AgentDirectoryResult<()> {
        let mut agents = self.agents.write().map_err(|err| {
            AgentDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        agents.insert(agent.embed_token().clone(), agent);
        Ok(())
    }
}

impl FromIterator<EmbedAgent> for InMemoryAgentDirectory {
    fn from_iter<I: IntoIterator<Item = EmbedAgent>>(iter: I) -> Self {
        let agents = iter
            .into_iter()
            .map(|agent| (agent.embed_token().clone(), agent))
            .collect();
        Self {
            agents: Arc::new(RwLock::new(agents)),
        }
    }
}

#[async_trait]
impl AgentDirectory for InMemoryAgentDirectory {
    async fn find_active_by_token(
        &self,
        token: &EmbedToken,
    ) -> AgentDirectoryResult<Option<EmbedAgent>> {
        let agents = self.agents.read().map_err(|err| {
            AgentDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(agents
            .get(token)
            .filter(|agent| agent.status().is_active())
            .cloned())
    }
}
