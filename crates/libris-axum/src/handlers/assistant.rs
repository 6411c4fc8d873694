//! Model-backed handlers: recommendations and summaries.
//!
//! A failed generation surfaces as 400 with "Failed to generate content".

use axum::Extension;
use axum::extract::State;
use libris_core::{BookIdSummary, BookNameSummary, Claims, GeneratedSummary, Message, Normalized};

use crate::dto::{ApiJson, ApiPath, ApiResponse, SummaryRequest};
use crate::error::HttpError;
use crate::state::AppState;

/// Recommendations based on the caller's highly rated books.
///
/// The payload is the model's answer as JSON when it could be parsed,
/// otherwise the raw text.
pub async fn recommendations(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<ApiResponse<Normalized>, HttpError> {
    let recommendations = state
        .core
        .assistant()
        .recommendations(claims.user_id)
        .await?;
    Ok(ApiResponse::ok(
        Message::RecommendationsGenerated,
        recommendations,
    ))
}

/// Summarize free text.
pub async fn generate_summary(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SummaryRequest>,
) -> Result<ApiResponse<GeneratedSummary>, HttpError> {
    let summary = state.core.assistant().summarize_text(req.content).await?;
    Ok(ApiResponse::ok(Message::SummaryGenerated, summary))
}

/// Summarize a catalog book from its stored fields.
pub async fn summary_by_book_id(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<i64>,
) -> Result<ApiResponse<BookIdSummary>, HttpError> {
    let summary = state.core.assistant().summarize_book(book_id).await?;
    Ok(ApiResponse::ok(Message::SummaryGenerated, summary))
}

/// Summarize a book known only by its name.
pub async fn summary_by_book_name(
    State(state): State<AppState>,
    ApiPath(book_name): ApiPath<String>,
) -> Result<ApiResponse<BookNameSummary>, HttpError> {
    let summary = state.core.assistant().summarize_by_name(book_name).await?;
    Ok(ApiResponse::ok(Message::SummaryGenerated, summary))
}
