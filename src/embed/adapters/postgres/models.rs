//! Diesel row models for agent lookup.

use super::schema::agents;
use diesel::prelude::*;

/// Query result row for agent records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = agents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AgentRow {
    /// Opaque agent identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Public embed token.
    pub embed_token: String,
    /// Optional description.
    pub description: Option<String>,
    /// Raw comma-separated domain allow-list.
    pub allowed_domains: Option<String>,
    /// Lifecycle status.
    pub status: String,
}
