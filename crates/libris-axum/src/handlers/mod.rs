//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for a specific API area.
//! Handlers are thin wrappers that delegate to `AppCore`.

pub mod assistant;
pub mod auth;
pub mod books;
pub mod reviews;
