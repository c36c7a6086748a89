//! Logging bootstrap for binaries built on this crate.

use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, falling back to the
/// configured filter, then to `info`.
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing(config: &ClientConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
