//! `PostgreSQL` adapter for agent lookup.

mod directory;
mod models;
mod schema;

pub use directory::{AgentPgPool, PostgresAgentDirectory};
