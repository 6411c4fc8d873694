//! Core domain, ports and services for the libris book catalog.
//!
//! This crate has no knowledge of storage, HTTP or model backends. Adapters
//! implement the traits in [`ports`] and wire them together through
//! [`services::AppCore`].

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod normalize;
pub mod ports;
pub mod prompts;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{AppConfig, AuthConfig, ConfigError, InferenceConfig, ServerConfig};
pub use domain::{
    Book, BookSummary, Claims, Message, NewBook, NewReview, NewUser, Profile, Review, Role, User,
};
pub use normalize::{Normalized, normalize};
pub use ports::{
    BookRepository, CoreError, CredentialError, ModelOutput, PasswordHasherPort, Repos,
    RepositoryError, ReviewRepository, TextGenerationPort, TokenIssuerPort, UserRepository,
};
pub use prompts::{Prompt, PromptRequest};
pub use services::{
    AccessToken, AppCore, AssistantService, BookIdSummary, BookNameSummary, CatalogService,
    GeneratedSummary, UserService,
};
