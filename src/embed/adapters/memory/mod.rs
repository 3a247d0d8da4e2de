//! In-memory adapters for embed page tests and local runs.

mod directory;

pub use directory::InMemoryAgentDirectory;
