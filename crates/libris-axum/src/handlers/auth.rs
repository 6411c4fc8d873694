//! Account handlers: registration, login and profile.

use axum::Extension;
use axum::extract::State;
use axum::http::StatusCode;
use libris_core::{AccessToken, Claims, Message, Profile};

use crate::dto::{ApiJson, ApiResponse, LoginRequest, RegisterRequest};
use crate::error::HttpError;
use crate::state::AppState;

/// Register a new account.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<ApiResponse<()>, HttpError> {
    state
        .core
        .users()
        .register(&req.username, &req.email, &req.password)
        .await?;
    Ok(ApiResponse::empty(
        StatusCode::CREATED,
        Message::UserRegistered.as_str(),
    ))
}

/// Exchange credentials for an access token.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<ApiResponse<AccessToken>, HttpError> {
    let token = state
        .core
        .users()
        .login(&req.username, &req.password)
        .await?;
    Ok(ApiResponse::ok(Message::UserLoggedIn, token))
}

/// Profile of the caller.
pub async fn profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResponse<Profile> {
    ApiResponse::ok(Message::ProfileRetrieved, state.core.users().profile(&claims))
}
