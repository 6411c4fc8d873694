//! Credential ports: password hashing and access-token issuance.
//!
//! The core decides *when* to hash, verify or issue; adapters decide *how*
//! (bcrypt, JWT). Keeping these behind traits lets services be tested with
//! deterministic fakes.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Claims;

/// Errors raised by credential adapters.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Password hashing or verification failed internally.
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Token could not be signed.
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Token is malformed, has a bad signature, or is expired.
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// One-way password hashing.
///
/// Hashing is CPU-heavy; implementations must not run it on an async
/// worker thread.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasherPort: Send + Sync {
    /// Hash a plaintext password for storage.
    async fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// Check a plaintext password against a stored hash.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError>;
}

/// Issues and verifies signed access tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuerPort: Send + Sync {
    /// Sign a token for the given identity. `claims.exp` is filled in by the issuer.
    fn issue(&self, claims: Claims) -> Result<String, CredentialError>;

    /// Verify a token and return the identity it carries.
    fn verify(&self, token: &str) -> Result<Claims, CredentialError>;
}
