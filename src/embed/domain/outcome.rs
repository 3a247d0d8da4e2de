//! Terminal outcomes of an embed page request.

use super::{AgentId, EmbedAgent, EmbedConfig, EmbedToken, PageMetadata};
use serde::Serialize;

/// Shown in the rejection view when the request had no referer.
pub const NO_REFERER_MARKER: &str = "No referer header detected";

/// Properties handed to the chat widget.
///
/// Serializes to the widget's camelCase contract with the configuration
/// flattened alongside the agent identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetProps {
    /// Agent identifier.
    pub agent_id: AgentId,
    /// Agent display name.
    pub agent_name: String,
    /// Always `true` on the embed page.
    pub is_embed: bool,
    /// Embed token the widget uses to talk to the chat backend.
    pub token: EmbedToken,
    /// Embedder-supplied overrides.
    #[serde(flatten)]
    pub config: EmbedConfig,
}

impl WidgetProps {
    /// Combines an agent with its resolved configuration.
    #[must_use]
    pub fn new(agent: &EmbedAgent, config: EmbedConfig) -> Self {
        Self {
            agent_id: agent.id().clone(),
            agent_name: agent.name().to_owned(),
            is_embed: true,
            token: agent.embed_token().clone(),
            config,
        }
    }
}

/// The referer was not permitted to embed the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRejection {
    referer: Option<String>,
}

impl DomainRejection {
    /// Records the attempted referer. Empty values count as missing.
    #[must_use]
    pub fn new(referer: Option<&str>) -> Self {
        Self {
            referer: referer.filter(|value| !value.is_empty()).map(str::to_owned),
        }
    }

    /// Returns the attempted referer, if one was sent.
    #[must_use]
    pub fn referer(&self) -> Option<&str> {
        self.referer.as_deref()
    }

    /// Returns the referer or [`NO_REFERER_MARKER`] for display.
    #[must_use]
    pub fn display_referer(&self) -> &str {
        self.referer().unwrap_or(NO_REFERER_MARKER)
    }
}

/// Result of serving an embed page. Exactly one per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedOutcome {
    /// The token does not resolve to an active agent.
    NotFound,
    /// An allow-list is configured and the referer did not satisfy it.
    DomainRejected {
        /// Head metadata for the rejection page.
        metadata: PageMetadata,
        /// The rejected referer.
        rejection: DomainRejection,
    },
    /// The widget may be rendered.
    Widget {
        /// Head metadata for the widget page.
        metadata: PageMetadata,
        /// Widget properties.
        props: WidgetProps,
    },
}
