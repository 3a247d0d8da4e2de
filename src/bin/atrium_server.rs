//! Serves embed pages over HTTP.
//!
//! Usage:
//!
//! ```text
//! ATRIUM_DATABASE_URL=postgres://... atrium_server
//! ```
//!
//! See [`atrium::config::AtriumConfig`] for the recognised environment
//! variables.

use atrium::config::{AtriumConfig, ConfigError};
use atrium::embed::{
    adapters::{
        http::{EmbedHttpState, router},
        postgres::{AgentPgPool, PostgresAgentDirectory},
        templates::TemplatePageRenderer,
    },
    ports::RenderError,
    services::EmbedPageService,
};
use atrium::telemetry::init_tracing;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build database pool: {0}")]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("startup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "atrium server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = match AtriumConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            init_tracing("info");
            return Err(error.into());
        }
    };
    init_tracing(&config.log_filter);

    let pool = build_pool(config.database_url.clone(), config.db_pool_size).await?;
    let directory = PostgresAgentDirectory::new(pool);
    let renderer = TemplatePageRenderer::new(config.widget_script_url.clone())?;
    let app = router(EmbedHttpState::new(
        EmbedPageService::new(Arc::new(directory)),
        Arc::new(renderer),
    ));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "atrium server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_pool(database_url: String, max_size: u32) -> Result<AgentPgPool, ServerError> {
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(max_size)
            .build(ConnectionManager::<PgConnection>::new(database_url))
    })
    .await??;
    Ok(pool)
}
