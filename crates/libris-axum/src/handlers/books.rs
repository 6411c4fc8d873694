//! Book handlers - CRUD operations for the catalog.

use axum::extract::State;
use axum::http::StatusCode;
use libris_core::{Book, BookSummary, Message, NewBook};

use crate::dto::{ApiJson, ApiPath, ApiResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// List all books.
pub async fn list(State(state): State<AppState>) -> Result<ApiResponse<Vec<Book>>, HttpError> {
    let books = state.core.catalog().list().await?;
    Ok(ApiResponse::ok(Message::BooksRetrieved, books))
}

/// Get a single book by ID.
pub async fn get(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<i64>,
) -> Result<ApiResponse<Book>, HttpError> {
    let book = state.core.catalog().get(book_id).await?;
    Ok(ApiResponse::ok(Message::BookRetrieved, book))
}

/// Add a book to the catalog.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewBook>,
) -> Result<ApiResponse<Book>, HttpError> {
    let book = state.core.catalog().create(req).await?;
    Ok(ApiResponse::created(Message::BookCreated, book))
}

/// Replace every field of an existing book.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<i64>,
    ApiJson(req): ApiJson<NewBook>,
) -> Result<ApiResponse<Book>, HttpError> {
    let book = state.core.catalog().update(book_id, req).await?;
    Ok(ApiResponse::ok(Message::BookUpdated, book))
}

/// Delete a book and its reviews.
pub async fn remove(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<i64>,
) -> Result<ApiResponse<()>, HttpError> {
    state.core.catalog().delete(book_id).await?;
    Ok(ApiResponse::empty(StatusCode::OK, Message::BookDeleted.as_str()))
}

/// Average rating and review count.
pub async fn summary(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<i64>,
) -> Result<ApiResponse<BookSummary>, HttpError> {
    let summary = state.core.catalog().book_summary(book_id).await?;
    Ok(ApiResponse::ok(Message::BookSummaryRetrieved, summary))
}
