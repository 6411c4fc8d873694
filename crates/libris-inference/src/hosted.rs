//! Hosted model backend (OpenAI-compatible chat completions).
//!
//! Request: `{"model": "<name>", "messages": [{"role": "user", "content": "<prompt>"}]}`
//! with `Authorization: Bearer <key>`. The text is read from
//! `choices[0].message.content`, or `choices[0].text` for completion-style
//! responses.

use std::time::Duration;

use async_trait::async_trait;
use libris_core::Prompt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::{TextBackend, build_client, ensure_success};
use crate::error::{InferenceError, InferenceResult};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<Value>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
    text: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Single-shot backend for a hosted chat-completions API.
pub struct HostedBackend {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl HostedBackend {
    /// Create a backend for `endpoint` using `api_key` and `model`.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> InferenceResult<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl TextBackend for HostedBackend {
    fn name(&self) -> &'static str {
        "hosted"
    }

    async fn complete(&self, prompt: &Prompt) -> InferenceResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt.as_str(),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let body = ensure_success(response).await?.bytes().await?;
        extract_text(&body)
    }
}

/// Pull the generated text out of a chat or completion response body.
fn extract_text(body: &[u8]) -> InferenceResult<String> {
    let parsed: ChatResponse = serde_json::from_slice(body)
        .map_err(|e| InferenceError::MalformedResponse(format!("invalid JSON body: {e}")))?;

    if let Some(error) = parsed.error {
        return Err(InferenceError::MalformedResponse(format!(
            "backend reported error: {error}"
        )));
    }

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| InferenceError::MalformedResponse("response has no choices".to_string()))?;

    choice
        .message
        .and_then(|m| m.content)
        .or(choice.text)
        .ok_or_else(|| {
            InferenceError::MalformedResponse("first choice carries no text".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_content() {
        let body = br#"{"choices":[{"message":{"role":"assistant","content":"Hi there"}}]}"#;
        assert_eq!(extract_text(body).unwrap(), "Hi there");
    }

    #[test]
    fn test_completion_text() {
        let body = br#"{"choices":[{"text":"plain completion"}]}"#;
        assert_eq!(extract_text(body).unwrap(), "plain completion");
    }

    #[test]
    fn test_empty_content_is_text() {
        let body = br#"{"choices":[{"message":{"content":""}}]}"#;
        assert_eq!(extract_text(body).unwrap(), "");
    }

    #[test]
    fn test_no_choices_is_malformed() {
        let err = extract_text(br#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, InferenceError::MalformedResponse(_)));
    }

    #[test]
    fn test_error_object_is_malformed() {
        let err = extract_text(br#"{"error":{"message":"quota exceeded"}}"#).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = extract_text(b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, InferenceError::MalformedResponse(_)));
    }

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "gpt",
            messages: [ChatMessage {
                role: "user",
                content: "hello",
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"model": "gpt", "messages": [{"role": "user", "content": "hello"}]})
        );
    }
}
