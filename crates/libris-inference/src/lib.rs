//! Text-generation backends for libris.
//!
//! Two backends are provided:
//!
//! - [`LocalBackend`]: a local model server speaking streaming NDJSON
//! - [`HostedBackend`]: a hosted OpenAI-compatible chat-completions API
//!
//! [`InferenceDispatcher`] picks the primary from configuration, falls back
//! to the other backend at most once, and implements
//! [`libris_core::TextGenerationPort`]. Backend errors stay inside this crate.

#![deny(unused_crate_dependencies)]

mod backend;
mod dispatcher;
mod error;
mod hosted;
mod local;

pub use backend::TextBackend;
pub use dispatcher::InferenceDispatcher;
pub use error::{InferenceError, InferenceResult};
pub use hosted::HostedBackend;
pub use local::{LocalBackend, NdjsonAggregator};

// Used by the integration tests only
#[cfg(test)]
use axum as _;
