//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_book_repository;
mod sqlite_review_repository;
mod sqlite_user_repository;

pub use sqlite_book_repository::SqliteBookRepository;
pub use sqlite_review_repository::SqliteReviewRepository;
pub use sqlite_user_repository::SqliteUserRepository;

use libris_core::RepositoryError;

/// Map `SQLx` errors to `RepositoryError`.
fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return RepositoryError::AlreadyExists(db_err.message().to_string());
        }
        if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
            return RepositoryError::Constraint(db_err.message().to_string());
        }
    }
    RepositoryError::Storage(e.to_string())
}
