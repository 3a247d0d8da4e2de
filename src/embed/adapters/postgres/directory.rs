//! `PostgreSQL` agent directory.

use super::{models::AgentRow, schema::agents};
use crate::embed::{
    domain::{AgentId, AgentStatus, EmbedAgent, EmbedToken},
    ports::{AgentDirectory, AgentDirectoryError, AgentDirectoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the agent directory.
pub type AgentPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed agent directory.
#[derive(Debug, Clone)]
pub struct PostgresAgentDirectory {
    pool: AgentPgPool,
}

impl PostgresAgentDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AgentPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AgentDirectoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AgentDirectoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AgentDirectoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AgentDirectoryError::persistence)?
    }
}

#[async_trait]
impl AgentDirectory for PostgresAgentDirectory {
    async fn find_active_by_token(
        &self,
        token: &EmbedToken,
    ) -> AgentDirectoryResult<Option<EmbedAgent>> {
        let token_value = token.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = agents::table
                .filter(agents::embed_token.eq(&token_value))
                .filter(agents::status.eq(AgentStatus::Active.as_str()))
                .select(AgentRow::as_select())
                .first::<AgentRow>(connection)
                .optional()
                .map_err(AgentDirectoryError::persistence)?;
            row.map(row_to_agent).transpose()
        })
        .await
    }
}

fn row_to_agent(row: AgentRow) -> AgentDirectoryResult<EmbedAgent> {
    let AgentRow {
        id,
        name,
        embed_token,
        description,
        allowed_domains,
        status,
    } = row;

    let agent_id = AgentId::new(id).map_err(AgentDirectoryError::invalid_persisted_data)?;
    let token = EmbedToken::new(embed_token).map_err(AgentDirectoryError::invalid_persisted_data)?;
    let agent_status = AgentStatus::try_from(status.as_str())
        .map_err(AgentDirectoryError::invalid_persisted_data)?;

    let mut agent = EmbedAgent::new(agent_id, name, token).with_status(agent_status);
    if let Some(text) = description {
        agent = agent.with_description(text);
    }
    if let Some(domains) = allowed_domains {
        agent = agent.with_allowed_domains(domains);
    }
    Ok(agent)
}

#[cfg(test)]
mod tests {
    use super::{AgentRow, row_to_agent};
    use crate::embed::{
        domain::{AgentStatus, PageMetadata},
        ports::AgentDirectoryError,
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> AgentRow {
        AgentRow {
            id: "agent-42".to_owned(),
            name: "Support Bot".to_owned(),
            embed_token: "tok_live_abc".to_owned(),
            description: Some("Answers billing questions".to_owned()),
            allowed_domains: Some("example.com, https://shop.example.org/".to_owned()),
            status: "active".to_owned(),
        }
    }

    #[rstest]
    fn row_converts_to_agent(row: AgentRow) {
        let agent = row_to_agent(row).expect("row should convert");

        assert_eq!(agent.id().as_str(), "agent-42");
        assert_eq!(agent.name(), "Support Bot");
        assert_eq!(agent.embed_token().as_str(), "tok_live_abc");
        assert_eq!(agent.description(), Some("Answers billing questions"));
        assert_eq!(agent.status(), AgentStatus::Active);
        assert_eq!(agent.allow_list().iter().count(), 2);
    }

    #[rstest]
    fn null_columns_stay_unset(mut row: AgentRow) {
        row.description = None;
        row.allowed_domains = None;

        let agent = row_to_agent(row).expect("row should convert");

        assert_eq!(agent.description(), None);
        assert!(agent.allow_list().is_unrestricted());
    }

    #[rstest]
    fn blank_names_are_served_as_configured(mut row: AgentRow) {
        row.name = String::new();

        let agent = row_to_agent(row).expect("row should convert");

        assert_eq!(agent.name(), "");
        assert_eq!(PageMetadata::for_agent(Some(&agent)).title, " - Chat");
    }

    #[rstest]
    #[case::unknown_status("archived", "tok")]
    #[case::blank_token("active", "  ")]
    fn corrupt_rows_are_reported(
        mut row: AgentRow,
        #[case] status: &str,
        #[case] token: &str,
    ) {
        row.status = status.to_owned();
        row.embed_token = token.to_owned();

        let result = row_to_agent(row);

        assert!(matches!(
            result,
            Err(AgentDirectoryError::InvalidPersistedData(_))
        ));
    }
}
