//! Axum HTTP adapter for libris.
//!
//! This crate exposes the catalog, account and assistant services over a
//! JSON API. All wiring happens in [`bootstrap`]; handlers only translate
//! between HTTP and the `AppCore` facade.

#![deny(unused_crate_dependencies)]

pub mod auth;
pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use auth::{BcryptHasher, JwtIssuer, require_auth};
pub use bootstrap::{AxumContext, CorsConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;

// Used by the integration tests only
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use reqwest as _;
#[cfg(test)]
use tower as _;
