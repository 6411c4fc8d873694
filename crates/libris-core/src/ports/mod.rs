//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx`, `reqwest` or `axum` types in any signature
//! - Repository traits are minimal and CRUD-focused
//! - Text generation never fails loudly: failure is a value, not an error

pub mod book_repository;
pub mod credentials;
pub mod review_repository;
pub mod text_generation;
pub mod user_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::Message;

pub use book_repository::BookRepository;
pub use credentials::{CredentialError, PasswordHasherPort, TokenIssuerPort};
pub use review_repository::ReviewRepository;
pub use text_generation::{ModelOutput, TextGenerationPort};
pub use user_repository::UserRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in `libris-core`
/// so that `AppCore` can accept it without depending on `libris-db`.
#[derive(Clone)]
pub struct Repos {
    /// Book repository for catalog CRUD.
    pub books: Arc<dyn BookRepository>,
    /// Review repository.
    pub reviews: Arc<dyn ReviewRepository>,
    /// User account repository.
    pub users: Arc<dyn UserRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        books: Arc<dyn BookRepository>,
        reviews: Arc<dyn ReviewRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            books,
            reviews,
            users,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., foreign key).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map it to their own error types (HTTP status codes, CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The requested entity does not exist.
    #[error("{0}")]
    NotFound(Message),

    /// The entity already exists.
    #[error("{0}")]
    Conflict(Message),

    /// Validation error (invalid input).
    #[error("{0}")]
    Validation(String),

    /// Username/password pair did not match.
    #[error("{}", Message::InvalidCredentials)]
    InvalidCredentials,

    /// Missing, malformed or expired access token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Both text-generation backends failed.
    #[error("{}", Message::GenerationFailed)]
    GenerationFailed,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CredentialError> for CoreError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::InvalidToken(msg) => Self::Unauthorized(msg),
            CredentialError::Hashing(msg) | CredentialError::Signing(msg) => Self::Internal(msg),
        }
    }
}
