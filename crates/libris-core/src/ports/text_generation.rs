//! Text generation port.
//!
//! A text generator turns a prompt into model output. Implementations absorb
//! every transport, status and decoding fault: the caller only ever sees
//! either the generated text or [`ModelOutput::NoContent`].

use async_trait::async_trait;

use crate::prompts::Prompt;

/// Result of a text-generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutput {
    /// Generated text. May be empty if the model produced nothing.
    Text(String),
    /// The call failed on every backend that was tried.
    NoContent,
}

impl ModelOutput {
    /// Convert into an `Option`, mapping `NoContent` to `None`.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::NoContent => None,
        }
    }

    /// Whether this is the failure sentinel.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }
}

/// Port for text-generation backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerationPort: Send + Sync {
    /// Generate text for a prompt.
    async fn generate(&self, prompt: &Prompt) -> ModelOutput;
}
