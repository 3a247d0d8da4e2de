//! Shared world state for embed access BDD scenarios.

use std::sync::Arc;

use atrium::embed::{
    adapters::memory::InMemoryAgentDirectory,
    domain::{AgentId, EmbedAgent, EmbedOutcome, EmbedToken},
    services::{EmbedPageService, EmbedPageServiceError},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestEmbedService = EmbedPageService<InMemoryAgentDirectory>;

/// Scenario world for embed access behaviour tests.
pub struct EmbedWorld {
    /// Directory backing the service; scenarios seed it in `Given` steps.
    pub directory: InMemoryAgentDirectory,
    /// The page service under test.
    pub service: TestEmbedService,
    /// Outcome of the last page request.
    pub last_outcome: Option<Result<EmbedOutcome, EmbedPageServiceError>>,
}

impl EmbedWorld {
    /// Creates a world with an empty directory.
    #[must_use]
    pub fn new() -> Self {
        let directory = InMemoryAgentDirectory::new();
        let service = EmbedPageService::new(Arc::new(directory.clone()));
        Self {
            directory,
            service,
            last_outcome: None,
        }
    }

    /// Returns the last successful outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when no request was made or the request failed.
    pub fn outcome(&self) -> Result<&EmbedOutcome, eyre::Report> {
        match self.last_outcome.as_ref() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(err)) => Err(eyre::eyre!("embed request failed: {err}")),
            None => Err(eyre::eyre!("no embed request recorded in scenario world")),
        }
    }
}

impl Default for EmbedWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> EmbedWorld {
    EmbedWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds an agent whose identifier is derived from its token.
///
/// # Errors
///
/// Returns an error when the token is blank.
pub fn build_agent(token: &str) -> Result<EmbedAgent, eyre::Report> {
    let agent = EmbedAgent::new(
        AgentId::new(format!("agent-{token}"))?,
        "Scenario Agent",
        EmbedToken::new(token)?,
    );
    Ok(agent)
}
