//! Port contracts for embed page collaborators.
//!
//! Ports keep agent lookup and page rendering outside the domain so the
//! access and configuration logic stays pure.

pub mod directory;
pub mod renderer;

pub use directory::{AgentDirectory, AgentDirectoryError, AgentDirectoryResult};
pub use renderer::{EmbedPageRenderer, RenderError};

#[cfg(test)]
pub use directory::MockAgentDirectory;
