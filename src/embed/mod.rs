//! Public chat-widget embedding for agents.
//!
//! An embed page is addressed by an agent's opaque embed token. Before the
//! widget is handed out, the request's `Referer` is checked against the
//! agent's domain allow-list, and the iframe query string is resolved into a
//! typed widget configuration. The module follows hexagonal architecture:
//!
//! - Domain types and the pure allow-list / configuration logic in [`domain`]
//! - Port contracts for agent lookup and page rendering in [`ports`]
//! - Adapter implementations (memory, `PostgreSQL`, templates, HTTP) in
//!   [`adapters`]
//! - The page controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
