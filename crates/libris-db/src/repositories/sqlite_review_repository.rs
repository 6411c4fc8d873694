//! `SQLite` implementation of the `ReviewRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use libris_core::{NewReview, RepositoryError, Review, ReviewRepository};

use super::map_sqlx_error;
use super::row_mappers::{REVIEW_SELECT_COLUMNS, row_to_review};

/// `SQLite` implementation of the `ReviewRepository` trait.
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new `SQLite` review repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepository {
    async fn insert(&self, review: &NewReview) -> Result<Review, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO reviews (book_id, user_id, review_text, rating) VALUES (?, ?, ?, ?)",
        )
        .bind(review.book_id)
        .bind(review.user_id)
        .bind(&review.review_text)
        .bind(review.rating)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Review {
            id: result.last_insert_rowid(),
            book_id: review.book_id,
            user_id: review.user_id,
            review_text: review.review_text.clone(),
            rating: review.rating,
        })
    }

    async fn list_for_book(&self, book_id: i64) -> Result<Vec<Review>, RepositoryError> {
        let query =
            format!("SELECT {REVIEW_SELECT_COLUMNS} FROM reviews WHERE book_id = ? ORDER BY id");

        let rows = sqlx::query(&query)
            .bind(book_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_review).collect()
    }
}
