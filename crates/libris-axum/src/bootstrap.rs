//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::{Context, Result};
use libris_core::{AppConfig, AppCore};
use libris_db::{CoreFactory, setup_database};
use libris_inference::InferenceDispatcher;

use crate::auth::{BcryptHasher, JwtIssuer};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// An empty origin list means allow all.
    pub fn from_origins(origins: &[String]) -> Self {
        if origins.is_empty() {
            Self::AllowAll
        } else {
            Self::AllowOrigins(origins.to_vec())
        }
    }
}

/// Context for Axum handlers.
#[derive(Clone)]
pub struct AxumContext {
    /// Core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    pub fn new(core: AppCore) -> Self {
        Self {
            core: Arc::new(core),
        }
    }
}

/// Bootstrap the Axum context with all dependencies wired.
pub async fn bootstrap(config: &AppConfig) -> Result<AxumContext> {
    let pool = setup_database(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database_url))?;

    let generator = InferenceDispatcher::from_config(&config.inference)
        .context("Failed to configure inference backends")?;
    let hasher = BcryptHasher::default();
    let tokens = JwtIssuer::new(&config.auth.jwt_secret, config.auth.token_ttl_minutes);

    let core = CoreFactory::build_app_core(
        pool,
        Arc::new(generator),
        Arc::new(hasher),
        Arc::new(tokens),
    );

    Ok(AxumContext::new(core))
}

/// Start the Axum server.
pub async fn start_server(config: &AppConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(config).await?;
    let cors = CorsConfig::from_origins(&config.server.cors_origins);
    let app = crate::routes::create_router(ctx, &cors);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("libris server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
