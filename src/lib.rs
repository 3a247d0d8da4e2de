//! Atrium: public chat-widget embedding for agents.
//!
//! This crate serves the embeddable chat page for an agent, addressed by the
//! agent's opaque embed token, and decides whether the embedding site may
//! show it.
//!
//! # Architecture
//!
//! Atrium follows hexagonal architecture principles:
//!
//! - **Domain**: Allow-list normalization, referer matching and widget
//!   configuration resolution, with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for agent lookup and rendering
//! - **Adapters**: Concrete implementations of ports (database, templates,
//!   HTTP)
//!
//! # Modules
//!
//! - [`embed`]: Embed access control, widget configuration and page serving
//! - [`config`]: Environment-driven server configuration
//! - [`telemetry`]: `tracing` subscriber setup

pub mod config;
pub mod embed;
pub mod telemetry;
