//! CLI bootstrap: logging and configuration.
//!
//! Infrastructure wiring for the server lives in `libris_axum::bootstrap`;
//! this module only prepares what every command needs.

use libris_core::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Install the global `tracing` subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `info`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .init();
}

/// Resolve configuration from the environment (after `.env` is loaded).
pub fn load_config() -> Result<AppConfig, CliError> {
    let config = AppConfig::from_env()?;
    tracing::debug!(
        database_url = %config.database_url,
        port = config.server.port,
        use_local = config.inference.use_local,
        "Configuration loaded"
    );
    Ok(config)
}
