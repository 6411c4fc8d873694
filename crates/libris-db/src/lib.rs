//! `SQLite` persistence for libris.
//!
//! Implements the repository ports from `libris-core` on top of `sqlx`.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export repository implementations
pub use repositories::{SqliteBookRepository, SqliteReviewRepository, SqliteUserRepository};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// Linked only for its bundled SQLite build.
use libsqlite3_sys as _;
