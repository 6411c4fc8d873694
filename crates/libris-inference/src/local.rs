//! Local model backend (Ollama-style `/api/generate`).
//!
//! Request: `{"model": "<name>", "prompt": "<prompt>"}`.
//! Response: newline-delimited JSON, one object per fragment, each with a
//! `response` string. Fragments are concatenated in arrival order.

use std::time::Duration;

use async_trait::async_trait;
use bytes::BytesMut;
use futures_util::StreamExt;
use libris_core::Prompt;
use serde::Serialize;
use serde_json::Value;

use crate::backend::{TextBackend, build_client, ensure_success};
use crate::error::{InferenceError, InferenceResult};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

/// Streaming backend for a locally hosted model server.
pub struct LocalBackend {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl LocalBackend {
    /// Create a backend for `endpoint` serving `model`.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> InferenceResult<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: endpoint.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl TextBackend for LocalBackend {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn complete(&self, prompt: &Prompt) -> InferenceResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest {
                model: &self.model,
                prompt: prompt.as_str(),
            })
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let mut aggregator = NdjsonAggregator::default();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            aggregator.push(&chunk?)?;
        }
        aggregator.finish()
    }
}

/// Reassembles NDJSON lines from arbitrarily split chunks and concatenates
/// their `response` fields.
#[derive(Debug, Default)]
pub struct NdjsonAggregator {
    buf: BytesMut,
    output: String,
    fragments: usize,
}

impl NdjsonAggregator {
    /// Feed the next network chunk. Complete lines are consumed immediately.
    pub fn push(&mut self, chunk: &[u8]) -> InferenceResult<()> {
        self.buf.extend_from_slice(chunk);
        while let Some(line_end) = find_newline(&self.buf) {
            let line = self.buf.split_to(line_end);
            self.consume_line(&line)?;
        }
        Ok(())
    }

    /// Consume any trailing line without a newline and return the text.
    pub fn finish(mut self) -> InferenceResult<String> {
        if !self.buf.is_empty() {
            let rest = self.buf.split();
            self.consume_line(&rest)?;
        }
        tracing::trace!(fragments = self.fragments, "Local stream complete");
        Ok(self.output)
    }

    fn consume_line(&mut self, line: &[u8]) -> InferenceResult<()> {
        let line = std::str::from_utf8(line)
            .map_err(|e| InferenceError::MalformedResponse(format!("invalid UTF-8: {e}")))?
            .trim();
        if line.is_empty() {
            return Ok(());
        }

        let value: Value = serde_json::from_str(line)
            .map_err(|e| InferenceError::MalformedResponse(format!("invalid JSON line: {e}")))?;

        if let Some(error) = value.get("error") {
            let message = error.as_str().map_or_else(|| error.to_string(), String::from);
            return Err(InferenceError::MalformedResponse(format!(
                "backend reported error: {message}"
            )));
        }

        let fragment = value
            .get("response")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                InferenceError::MalformedResponse("line has no 'response' field".to_string())
            })?;
        self.output.push_str(fragment);
        self.fragments += 1;
        Ok(())
    }
}

fn find_newline(buf: &BytesMut) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n').map(|pos| pos + 1)
}
