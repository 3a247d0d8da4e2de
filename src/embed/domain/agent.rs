//! Agent snapshot as seen by the embed page.

use super::{AgentId, AgentStatus, AllowList, EmbedToken};
use serde::{Deserialize, Serialize};

/// Read-only view of an agent, fetched fresh for every embed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAgent {
    id: AgentId,
    name: String,
    embed_token: EmbedToken,
    description: Option<String>,
    allowed_domains: Option<String>,
    status: AgentStatus,
}

impl EmbedAgent {
    /// Creates an active agent with no description and no domain restriction.
    ///
    /// The display name is taken as configured; a blank name is still served.
    #[must_use]
    pub fn new(id: AgentId, name: impl Into<String>, embed_token: EmbedToken) -> Self {
        Self {
            id,
            name: name.into(),
            embed_token,
            description: None,
            allowed_domains: None,
            status: AgentStatus::Active,
        }
    }

    /// Sets the agent description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw comma-separated domain allow-list.
    #[must_use]
    pub fn with_allowed_domains(mut self, allowed_domains: impl Into<String>) -> Self {
        self.allowed_domains = Some(allowed_domains.into());
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the embed token.
    #[must_use]
    pub const fn embed_token(&self) -> &EmbedToken {
        &self.embed_token
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the raw allow-list exactly as configured.
    #[must_use]
    pub fn allowed_domains(&self) -> Option<&str> {
        self.allowed_domains.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AgentStatus {
        self.status
    }

    /// Normalizes the configured allow-list.
    #[must_use]
    pub fn allow_list(&self) -> AllowList {
        AllowList::parse(self.allowed_domains())
    }
}
