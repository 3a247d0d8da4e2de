//! Process configuration read from the environment.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_DB_POOL_SIZE: u32 = 8;
const DEFAULT_WIDGET_SCRIPT_URL: &str = "/static/chat-widget.js";

const BIND_ADDR_VAR: &str = "ATRIUM_BIND_ADDR";
const LOG_FILTER_VAR: &str = "ATRIUM_LOG_FILTER";
const DATABASE_URL_VAR: &str = "ATRIUM_DATABASE_URL";
const DB_POOL_SIZE_VAR: &str = "ATRIUM_DB_POOL_SIZE";
const WIDGET_SCRIPT_URL_VAR: &str = "ATRIUM_WIDGET_SCRIPT_URL";

/// Runtime settings for the embed page server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtriumConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// `tracing` filter directive, e.g. `info` or `atrium=debug`.
    pub log_filter: String,
    /// `PostgreSQL` connection URL for the agent directory.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub db_pool_size: u32,
    /// URL of the chat widget bundle referenced by the widget page.
    pub widget_script_url: String,
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bind address does not parse as a socket address.
    #[error("invalid ATRIUM_BIND_ADDR value '{value}': {source}")]
    InvalidBindAddr {
        /// Raw value.
        value: String,
        /// Parser diagnostic.
        source: std::net::AddrParseError,
    },

    /// No database URL was configured.
    #[error("ATRIUM_DATABASE_URL must be set")]
    MissingDatabaseUrl,

    /// The pool size is not a positive integer.
    #[error("invalid ATRIUM_DB_POOL_SIZE value '{value}': expected a positive integer")]
    InvalidPoolSize {
        /// Raw value.
        value: String,
    },
}

impl AtriumConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is missing or malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let bind_addr_raw = read(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr_raw.clone(),
                source,
            })?;

        let log_filter = read(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        let database_url = read(DATABASE_URL_VAR).ok_or(ConfigError::MissingDatabaseUrl)?;

        let db_pool_size = match read(DB_POOL_SIZE_VAR) {
            None => DEFAULT_DB_POOL_SIZE,
            Some(value) => parse_pool_size(value)?,
        };

        let widget_script_url =
            read(WIDGET_SCRIPT_URL_VAR).unwrap_or_else(|| DEFAULT_WIDGET_SCRIPT_URL.to_owned());

        Ok(Self {
            bind_addr,
            log_filter,
            database_url,
            db_pool_size,
            widget_script_url,
        })
    }
}

fn parse_pool_size(value: String) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPoolSize { value }),
    }
}
