//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use std::sync::Arc;

use sqlx::SqlitePool;

use libris_core::ports::{PasswordHasherPort, TextGenerationPort, TokenIssuerPort};
use libris_core::{AppCore, Repos};

use crate::repositories::{SqliteBookRepository, SqliteReviewRepository, SqliteUserRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    /// Returns a `Repos` struct from `libris-core` containing trait-object-wrapped
    /// repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteBookRepository::new(pool.clone())),
            Arc::new(SqliteReviewRepository::new(pool.clone())),
            Arc::new(SqliteUserRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool and adapters.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos, generator, hasher, tokens);
    /// ```
    pub fn build_app_core(
        pool: SqlitePool,
        generator: Arc<dyn TextGenerationPort>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenIssuerPort>,
    ) -> AppCore {
        let repos = Self::build_repos(pool);
        AppCore::new(repos, generator, hasher, tokens)
    }
}
