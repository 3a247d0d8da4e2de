//! Diesel schema for the agents table, restricted to the columns the embed
//! page reads.

diesel::table! {
    /// Agent records owned by the agent dashboard.
    agents (id) {
        /// Opaque agent identifier.
        id -> Varchar,
        /// Display name.
        name -> Varchar,
        /// Public embed token.
        embed_token -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Raw comma-separated domain allow-list.
        allowed_domains -> Nullable<Text>,
        /// Lifecycle status (active or inactive).
        status -> Varchar,
    }
}
