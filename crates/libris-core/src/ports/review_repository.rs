//! Review repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewReview, Review};

/// Repository for review persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a review and return it with its assigned ID.
    async fn insert(&self, review: &NewReview) -> Result<Review, RepositoryError>;

    /// All reviews for a book, oldest first.
    async fn list_for_book(&self, book_id: i64) -> Result<Vec<Review>, RepositoryError>;
}
