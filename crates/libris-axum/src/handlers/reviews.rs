//! Review handlers.

use axum::Extension;
use axum::extract::State;
use libris_core::{Claims, Message, Review};

use crate::dto::{ApiJson, ApiPath, ApiResponse, ReviewRequest};
use crate::error::HttpError;
use crate::state::AppState;

/// Review a book as the authenticated user.
pub async fn add(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiPath(book_id): ApiPath<i64>,
    ApiJson(req): ApiJson<ReviewRequest>,
) -> Result<ApiResponse<Review>, HttpError> {
    let review = state
        .core
        .catalog()
        .add_review(book_id, claims.user_id, req.review_text, req.rating)
        .await?;
    Ok(ApiResponse::created(Message::ReviewAdded, review))
}

/// List reviews for a book.
pub async fn list(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<i64>,
) -> Result<ApiResponse<Vec<Review>>, HttpError> {
    let reviews = state.core.catalog().list_reviews(book_id).await?;
    Ok(ApiResponse::ok(Message::ReviewsRetrieved, reviews))
}
