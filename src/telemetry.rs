//! Logging setup for the server binary.

use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber filtered by `filter`.
///
/// `RUST_LOG`, when set, takes precedence over `filter`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
