//! User repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewUser, User};

/// Repository for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by username.
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Insert a user.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the username or email is taken.
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;
}
