//! Backend abstraction for text generation.
//!
//! A backend issues exactly one request per call and either returns the
//! complete generated text or an [`InferenceError`]. Retry and fallback
//! policy live in the dispatcher, not here.

use std::time::Duration;

use async_trait::async_trait;
use libris_core::Prompt;
use reqwest::StatusCode;

use crate::error::{InferenceError, InferenceResult};

/// A single text-generation backend.
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Short name used in logs (`local`, `hosted`).
    fn name(&self) -> &'static str;

    /// Generate text for a prompt.
    async fn complete(&self, prompt: &Prompt) -> InferenceResult<String>;
}

/// Build the shared HTTP client with a whole-request timeout.
pub(crate) fn build_client(timeout: Duration) -> InferenceResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("libris/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Turn non-success statuses into errors.
pub(crate) async fn ensure_success(response: reqwest::Response) -> InferenceResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(InferenceError::RateLimited);
    }
    let body = response.text().await.unwrap_or_default();
    Err(InferenceError::status(status.as_u16(), &body))
}
