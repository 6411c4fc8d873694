//! Inference dispatcher: primary backend with a single fallback.

use std::sync::Arc;

use async_trait::async_trait;
use libris_core::{InferenceConfig, ModelOutput, Prompt, TextGenerationPort};

use crate::backend::TextBackend;
use crate::error::InferenceResult;
use crate::hosted::HostedBackend;
use crate::local::LocalBackend;

/// Calls the primary backend and, if it fails, the fallback exactly once.
///
/// Faults never escape: when every attempted backend fails the result is
/// [`ModelOutput::NoContent`]. Calls are strictly sequential.
pub struct InferenceDispatcher {
    primary: Arc<dyn TextBackend>,
    fallback: Option<Arc<dyn TextBackend>>,
}

impl InferenceDispatcher {
    /// Create a dispatcher from explicit backends.
    pub fn new(primary: Arc<dyn TextBackend>, fallback: Option<Arc<dyn TextBackend>>) -> Self {
        Self { primary, fallback }
    }

    /// Build backends from configuration.
    ///
    /// `use_local` picks the primary. The other backend becomes the fallback
    /// only when it is fully configured.
    pub fn from_config(config: &InferenceConfig) -> InferenceResult<Self> {
        let local = || -> InferenceResult<Arc<dyn TextBackend>> {
            Ok(Arc::new(LocalBackend::new(
                &config.local_endpoint,
                &config.local_model_name,
                config.timeout,
            )?))
        };
        let hosted = || -> InferenceResult<Arc<dyn TextBackend>> {
            Ok(Arc::new(HostedBackend::new(
                &config.hosted_endpoint,
                &config.hosted_api_key,
                &config.hosted_model_name,
                config.timeout,
            )?))
        };

        let (primary, fallback) = if config.use_local {
            let fallback = config.hosted_configured().then(hosted).transpose()?;
            (local()?, fallback)
        } else {
            let fallback = config.local_configured().then(local).transpose()?;
            (hosted()?, fallback)
        };

        tracing::info!(
            primary = primary.name(),
            fallback = fallback.as_ref().map_or("none", |b| b.name()),
            "Inference backends configured"
        );
        Ok(Self::new(primary, fallback))
    }

    /// Generate text, falling back once on failure.
    pub async fn call_model(&self, prompt: &Prompt) -> ModelOutput {
        let primary_err = match self.primary.complete(prompt).await {
            Ok(text) => {
                tracing::debug!(backend = self.primary.name(), len = text.len(), "Generation succeeded");
                return ModelOutput::Text(text);
            }
            Err(e) => e,
        };

        let Some(fallback) = &self.fallback else {
            tracing::error!(
                backend = self.primary.name(),
                error = %primary_err,
                "Generation failed and no fallback backend is configured"
            );
            return ModelOutput::NoContent;
        };

        tracing::warn!(
            backend = self.primary.name(),
            fallback = fallback.name(),
            error = %primary_err,
            "Primary backend failed, falling back"
        );

        match fallback.complete(prompt).await {
            Ok(text) => {
                tracing::debug!(backend = fallback.name(), len = text.len(), "Generation succeeded");
                ModelOutput::Text(text)
            }
            Err(e) => {
                tracing::error!(
                    primary = self.primary.name(),
                    fallback = fallback.name(),
                    primary_error = %primary_err,
                    fallback_error = %e,
                    "All generation backends failed"
                );
                ModelOutput::NoContent
            }
        }
    }

    /// Name of the primary backend.
    pub fn primary_name(&self) -> &'static str {
        self.primary.name()
    }

    /// Name of the fallback backend, if any.
    pub fn fallback_name(&self) -> Option<&'static str> {
        self.fallback.as_ref().map(|b| b.name())
    }
}

#[async_trait]
impl TextGenerationPort for InferenceDispatcher {
    async fn generate(&self, prompt: &Prompt) -> ModelOutput {
        self.call_model(prompt).await
    }
}
