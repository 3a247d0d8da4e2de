//! Document head metadata for the embed page.

use super::EmbedAgent;
use serde::Serialize;

const FALLBACK_TITLE: &str = "Chat Assistant";
const FALLBACK_DESCRIPTION: &str = "AI Chat Assistant";

/// Viewport pinned for iframe embedding: no zoom, device width.
pub const VIEWPORT: &str = "width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no";

/// Title and description for the embed page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
}

impl PageMetadata {
    /// Builds metadata for a resolved agent, or generic metadata when the
    /// token resolved to nothing.
    #[must_use]
    pub fn for_agent(agent: Option<&EmbedAgent>) -> Self {
        let Some(found) = agent else {
            return Self::fallback();
        };
        let description = found
            .description()
            .filter(|text| !text.is_empty())
            .unwrap_or(FALLBACK_DESCRIPTION);
        Self {
            title: format!("{} - Chat", found.name()),
            description: description.to_owned(),
        }
    }

    /// Generic metadata used when no agent is known.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_owned(),
            description: FALLBACK_DESCRIPTION.to_owned(),
        }
    }
}
