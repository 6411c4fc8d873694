//! Row mapping helpers for `SQLite` queries.

use libris_core::{Book, RepositoryError, Review, Role, User};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for book queries.
pub const BOOK_SELECT_COLUMNS: &str = "id, title, author, genre, year_published, summary";

/// Shared SELECT column list for review queries.
pub const REVIEW_SELECT_COLUMNS: &str = "id, book_id, user_id, review_text, rating";

/// Shared SELECT column list for user queries.
pub const USER_SELECT_COLUMNS: &str = "id, username, email, password_hash, role";

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

/// Parse a database row into a Book.
pub fn row_to_book(row: &SqliteRow) -> Result<Book, RepositoryError> {
    Ok(Book {
        id: column(row, "id")?,
        title: column(row, "title")?,
        author: column(row, "author")?,
        genre: column(row, "genre")?,
        year_published: column(row, "year_published")?,
        summary: column(row, "summary")?,
    })
}

/// Parse a database row into a Review.
pub fn row_to_review(row: &SqliteRow) -> Result<Review, RepositoryError> {
    Ok(Review {
        id: column(row, "id")?,
        book_id: column(row, "book_id")?,
        user_id: column(row, "user_id")?,
        review_text: column(row, "review_text")?,
        rating: column(row, "rating")?,
    })
}

/// Parse a database row into a User.
pub fn row_to_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    let role: String = column(row, "role")?;
    Ok(User {
        id: column(row, "id")?,
        username: column(row, "username")?,
        email: column(row, "email")?,
        password_hash: column(row, "password_hash")?,
        role: Role::parse(&role)
            .ok_or_else(|| RepositoryError::Storage(format!("Unknown role '{role}'")))?,
    })
}
