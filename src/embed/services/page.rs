//! Embed page controller.
//!
//! Provides [`EmbedPageService`], which resolves an embed token to an agent,
//! enforces the agent's domain allow-list against the request referer and
//! resolves the widget configuration from the query string.

use crate::embed::{
    domain::{
        DomainRejection, EmbedAgent, EmbedConfig, EmbedOutcome, EmbedToken, PageMetadata,
        QueryParams, RefererVerdict, WidgetProps, evaluate,
    },
    ports::{AgentDirectory, AgentDirectoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for embed page requests.
///
/// Unknown tokens and rejected referers are outcomes, not errors.
#[derive(Debug, Error)]
pub enum EmbedPageServiceError {
    /// Agent lookup failed.
    #[error(transparent)]
    Directory(#[from] AgentDirectoryError),
}

/// Result type for embed page service operations.
pub type EmbedPageServiceResult<T> = Result<T, EmbedPageServiceError>;

/// Embed page orchestration service.
pub struct EmbedPageService<D>
where
    D: AgentDirectory,
{
    directory: Arc<D>,
}

impl<D> Clone for EmbedPageService<D>
where
    D: AgentDirectory,
{
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
        }
    }
}

impl<D> EmbedPageService<D>
where
    D: AgentDirectory,
{
    /// Creates a new embed page service.
    #[must_use]
    pub const fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Resolves the outcome of an embed page request.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedPageServiceError::Directory`] when agent lookup fails.
    pub async fn resolve(
        &self,
        raw_token: &str,
        referer: Option<&str>,
        query: &QueryParams,
    ) -> EmbedPageServiceResult<EmbedOutcome> {
        let Some(agent) = self.find_agent(raw_token).await? else {
            return Ok(EmbedOutcome::NotFound);
        };
        let metadata = PageMetadata::for_agent(Some(&agent));

        let verdict = evaluate(referer, &agent.allow_list());
        if !verdict.is_allowed() {
            log_rejection(&agent, &verdict, referer);
            return Ok(EmbedOutcome::DomainRejected {
                metadata,
                rejection: DomainRejection::new(referer),
            });
        }

        let props = WidgetProps::new(&agent, EmbedConfig::resolve(query));
        tracing::debug!(
            agent_id = %agent.id(),
            token = %agent.embed_token().fingerprint(),
            verdict = ?verdict,
            "serving embed widget"
        );
        Ok(EmbedOutcome::Widget { metadata, props })
    }

    async fn find_agent(&self, raw_token: &str) -> EmbedPageServiceResult<Option<EmbedAgent>> {
        let Ok(token) = EmbedToken::new(raw_token) else {
            return Ok(None);
        };
        let agent = self.directory.find_active_by_token(&token).await?;
        if agent.is_none() {
            tracing::debug!(token = %token.fingerprint(), "embed token did not resolve");
        }
        Ok(agent)
    }
}

fn log_rejection(agent: &EmbedAgent, verdict: &RefererVerdict, referer: Option<&str>) {
    tracing::info!(
        agent_id = %agent.id(),
        token = %agent.embed_token().fingerprint(),
        verdict = ?verdict,
        referer = referer.unwrap_or_default(),
        "embed referer not authorized"
    );
}
