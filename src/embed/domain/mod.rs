//! Domain model for embed access control and widget configuration.
//!
//! Everything here is pure: allow-list normalization, referer matching and
//! query-parameter resolution are plain functions of their inputs and can be
//! exercised without an HTTP stack or a database.

mod agent;
mod allow_list;
mod authorization;
mod embed_config;
mod error;
mod ids;
mod metadata;
mod outcome;
mod query;
mod referer;
mod status;

pub use agent::EmbedAgent;
pub use allow_list::{AllowList, NormalizedDomain};
pub use authorization::{RefererVerdict, evaluate, is_authorized};
pub use embed_config::{EMBED_OPTIONS, EmbedConfig, EmbedField, EmbedOption, ValueTransform};
pub use error::{EmbedDomainError, ParseAgentStatusError, RefererParseError};
pub use ids::{AgentId, EmbedToken};
pub use metadata::{PageMetadata, VIEWPORT};
pub use outcome::{DomainRejection, EmbedOutcome, NO_REFERER_MARKER, WidgetProps};
pub use query::{QueryParams, QueryValue};
pub use referer::RefererIdentity;
pub use status::AgentStatus;
