//! Catalog service - book CRUD, reviews and review aggregates.

use std::sync::Arc;

use crate::domain::{Book, BookSummary, MAX_RATING, MIN_RATING, Message, NewBook, NewReview, Review};
use crate::ports::{BookRepository, CoreError, RepositoryError, ReviewRepository};

/// Service for the book catalog.
pub struct CatalogService {
    books: Arc<dyn BookRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(books: Arc<dyn BookRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { books, reviews }
    }

    /// Add a book. Rejects a second book with the same title and author.
    pub async fn create(&self, book: NewBook) -> Result<Book, CoreError> {
        if self
            .books
            .find_by_title_author(&book.title, &book.author)
            .await?
            .is_some()
        {
            tracing::info!(title = %book.title, author = %book.author, "Duplicate book rejected");
            return Err(CoreError::Conflict(Message::BookAlreadyExists));
        }

        let created = self.books.insert(&book).await.map_err(map_book_error)?;
        tracing::info!(book_id = created.id, title = %created.title, "Book created");
        Ok(created)
    }

    /// List all books.
    pub async fn list(&self) -> Result<Vec<Book>, CoreError> {
        Ok(self.books.list().await?)
    }

    /// Get a book by ID.
    pub async fn get(&self, id: i64) -> Result<Book, CoreError> {
        self.books.get_by_id(id).await.map_err(map_book_error)
    }

    /// Replace every field of an existing book.
    pub async fn update(&self, id: i64, book: NewBook) -> Result<Book, CoreError> {
        self.get(id).await?;
        let updated = book.with_id(id);
        self.books.update(&updated).await.map_err(map_book_error)?;
        tracing::info!(book_id = id, "Book updated");
        Ok(updated)
    }

    /// Delete a book and its reviews.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.books.delete(id).await.map_err(map_book_error)?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }

    /// Add a review to an existing book.
    pub async fn add_review(
        &self,
        book_id: i64,
        user_id: i64,
        review_text: String,
        rating: i32,
    ) -> Result<Review, CoreError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CoreError::Validation(Message::InvalidRating.to_string()));
        }
        self.get(book_id).await?;

        let review = self
            .reviews
            .insert(&NewReview {
                book_id,
                user_id,
                review_text,
                rating,
            })
            .await?;
        tracing::info!(book_id, user_id, rating, "Review added");
        Ok(review)
    }

    /// Reviews for a book, oldest first. Unknown books simply have none.
    pub async fn list_reviews(&self, book_id: i64) -> Result<Vec<Review>, CoreError> {
        Ok(self.reviews.list_for_book(book_id).await?)
    }

    /// Average rating and review count for a book.
    pub async fn book_summary(&self, book_id: i64) -> Result<BookSummary, CoreError> {
        let book = self.get(book_id).await?;
        let ratings: Vec<i32> = self
            .reviews
            .list_for_book(book_id)
            .await?
            .iter()
            .map(|r| r.rating)
            .collect();
        Ok(BookSummary::from_ratings(&book, &ratings))
    }
}

fn map_book_error(err: RepositoryError) -> CoreError {
    match err {
        RepositoryError::NotFound(_) => CoreError::NotFound(Message::BookNotFound),
        RepositoryError::AlreadyExists(_) => CoreError::Conflict(Message::BookAlreadyExists),
        other => CoreError::Repository(other),
    }
}
