//! Axum-specific error types and mappings.
//!
//! This module provides the error type for the Axum adapter and mappings
//! from `CoreError` and `RepositoryError` to HTTP status codes. Every error
//! is rendered with the same envelope as successful responses, with a null
//! `data` field.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use libris_core::{CoreError, RepositoryError};
use thiserror::Error;

use crate::dto::ApiResponse;

/// Message shown for any 500 response. Details go to the log only.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input, failed generation, bad credentials).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing, malformed or expired access token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request body could not be decoded.
    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed with internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        let mut response = ApiResponse::<()>::empty(status, message).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::NotFound(msg) => Self::NotFound(msg.to_string()),
            CoreError::Conflict(msg) => Self::Conflict(msg.to_string()),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            e @ (CoreError::InvalidCredentials | CoreError::GenerationFailed) => {
                Self::BadRequest(e.to_string())
            }
            CoreError::Unauthorized(msg) => Self::Unauthorized(msg),
            CoreError::Configuration(msg) => Self::Internal(format!("Config: {msg}")),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => Self::Conflict(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Constraint(msg) => Self::BadRequest(msg),
        }
    }
}
