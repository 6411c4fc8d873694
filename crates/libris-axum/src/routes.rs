//! Route definitions and router construction.
//!
//! Handlers delegate to the shared `AppCore` facade. Everything except
//! `/health`, registration and login sits behind [`require_auth`].

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Routes reachable without a token.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// Routes that require a valid bearer token.
///
/// Returned WITHOUT the auth layer; the caller applies it with the state.
fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/profile", get(handlers::auth::profile))
        // Catalog
        .route(
            "/books",
            get(handlers::books::list).post(handlers::books::create),
        )
        .route(
            "/books/{book_id}",
            get(handlers::books::get)
                .put(handlers::books::update)
                .delete(handlers::books::remove),
        )
        .route("/books/{book_id}/summary", get(handlers::books::summary))
        // Reviews
        .route(
            "/books/{book_id}/reviews",
            get(handlers::reviews::list).post(handlers::reviews::add),
        )
        // Assistant (static segments take priority over `{book_id}`)
        .route(
            "/books/recommendations",
            get(handlers::assistant::recommendations),
        )
        .route(
            "/books/generate-summary",
            post(handlers::assistant::generate_summary),
        )
        .route(
            "/books/generate-summary-by-book-id/{book_id}",
            post(handlers::assistant::summary_by_book_id),
        )
        .route(
            "/books/generate-summary-by-book-name/{book_name}",
            get(handlers::assistant::summary_by_book_name),
        )
}

/// Create the main application router.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);
    let auth_layer = middleware::from_fn_with_state(state.clone(), require_auth);

    Router::new()
        .route("/health", get(health_check))
        .merge(public_routes())
        .merge(protected_routes().route_layer(auth_layer))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub(crate) async fn health_check() -> &'static str {
    "OK"
}
