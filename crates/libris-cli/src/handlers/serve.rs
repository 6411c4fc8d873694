//! Serve command handler.

use libris_core::AppConfig;

use crate::error::CliError;

/// Run the HTTP server until it stops.
///
/// `port` overrides the configured port for this invocation.
pub async fn execute(mut config: AppConfig, port: Option<u16>) -> Result<(), CliError> {
    if let Some(port) = port {
        config.server.port = port;
    }

    let inference = &config.inference;
    tracing::info!(
        port = config.server.port,
        primary = if inference.use_local { "local" } else { "hosted" },
        fallback = inference.fallback_available(),
        "Starting libris server"
    );

    libris_axum::start_server(&config)
        .await
        .map_err(|e: anyhow::Error| CliError::Server(format!("{e:#}")))
}
