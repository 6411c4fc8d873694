//! Book repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Book, NewBook};

/// Repository for book persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Duplicate detection policy belongs in `CatalogService`, not here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List all books ordered by ID.
    async fn list(&self) -> Result<Vec<Book>, RepositoryError>;

    /// Get a book by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the book doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Book, RepositoryError>;

    /// Find a book by exact title and author.
    async fn find_by_title_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Option<Book>, RepositoryError>;

    /// Insert a new book and return it with its assigned ID.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` on a title/author collision.
    async fn insert(&self, book: &NewBook) -> Result<Book, RepositoryError>;

    /// Replace all fields of an existing book.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the book doesn't exist.
    async fn update(&self, book: &Book) -> Result<(), RepositoryError>;

    /// Delete a book (and its reviews) by ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the book doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Books the user reviewed with a rating of at least `min_rating`.
    async fn list_rated_by_user(
        &self,
        user_id: i64,
        min_rating: i32,
    ) -> Result<Vec<Book>, RepositoryError>;
}
