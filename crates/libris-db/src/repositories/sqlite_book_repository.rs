//! `SQLite` implementation of the `BookRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use libris_core::{Book, BookRepository, NewBook, RepositoryError};

use super::map_sqlx_error;
use super::row_mappers::{BOOK_SELECT_COLUMNS, row_to_book};

/// `SQLite` implementation of the `BookRepository` trait.
pub struct SqliteBookRepository {
    pool: SqlitePool,
}

impl SqliteBookRepository {
    /// Create a new `SQLite` book repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn list(&self) -> Result<Vec<Book>, RepositoryError> {
        let query = format!("SELECT {BOOK_SELECT_COLUMNS} FROM books ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_book).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Book, RepositoryError> {
        let query = format!("SELECT {BOOK_SELECT_COLUMNS} FROM books WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Book with ID {id}")))?;

        row_to_book(&row)
    }

    async fn find_by_title_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Option<Book>, RepositoryError> {
        let query = format!("SELECT {BOOK_SELECT_COLUMNS} FROM books WHERE title = ? AND author = ?");

        sqlx::query(&query)
            .bind(title)
            .bind(author)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .as_ref()
            .map(row_to_book)
            .transpose()
    }

    async fn insert(&self, book: &NewBook) -> Result<Book, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO books (title, author, genre, year_published, summary) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.year_published)
        .bind(&book.summary)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(book.clone().with_id(result.last_insert_rowid()))
    }

    async fn update(&self, book: &Book) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE books SET title = ?, author = ?, genre = ?, year_published = ?, summary = ? WHERE id = ?",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.year_published)
        .bind(&book.summary)
        .bind(book.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Book with ID {}", book.id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Book with ID {id}")));
        }
        Ok(())
    }

    async fn list_rated_by_user(
        &self,
        user_id: i64,
        min_rating: i32,
    ) -> Result<Vec<Book>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT b.id, b.title, b.author, b.genre, b.year_published, b.summary
            FROM books b
            JOIN reviews r ON r.book_id = b.id
            WHERE r.user_id = ? AND r.rating >= ?
            ORDER BY b.id
            "#,
        )
        .bind(user_id)
        .bind(min_rating)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_book).collect()
    }
}
