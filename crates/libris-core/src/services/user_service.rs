//! User service - registration, login and profile lookup.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Claims, Message, NewUser, Profile, Role};
use crate::ports::{
    CoreError, PasswordHasherPort, RepositoryError, TokenIssuerPort, UserRepository,
};

/// Token type reported alongside every access token.
pub const TOKEN_TYPE: &str = "bearer";

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Service for user accounts and credentials.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasherPort>,
    tokens: Arc<dyn TokenIssuerPort>,
}

impl UserService {
    /// Create a new user service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenIssuerPort>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new account with the default role.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), CoreError> {
        tracing::info!(username, "Attempting to register user");

        if self.users.get_by_username(username).await?.is_some() {
            tracing::warn!(username, "Username already registered");
            return Err(CoreError::Validation(
                Message::UsernameAlreadyRegistered.to_string(),
            ));
        }

        let password_hash = self.hasher.hash(password).await?;
        let user = self
            .users
            .insert(&NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
                role: Role::default(),
            })
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists(_) => {
                    CoreError::Validation(Message::UsernameAlreadyRegistered.to_string())
                }
                other => CoreError::Repository(other),
            })?;

        tracing::info!(username, user_id = user.id, "User registered");
        Ok(())
    }

    /// Check credentials and issue an access token.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken, CoreError> {
        tracing::info!(username, "Attempting to log in user");

        let Some(user) = self.users.get_by_username(username).await? else {
            tracing::warn!(username, "Invalid credentials");
            return Err(CoreError::InvalidCredentials);
        };
        if !self.hasher.verify(password, &user.password_hash).await? {
            tracing::warn!(username, "Invalid credentials");
            return Err(CoreError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(Claims {
            sub: user.username,
            user_id: user.id,
            role: user.role,
            email: user.email,
            exp: 0,
        })?;

        tracing::info!(username, user_id = user.id, "User logged in");
        Ok(AccessToken {
            access_token,
            token_type: TOKEN_TYPE,
        })
    }

    /// Verify an access token and return the identity it carries.
    pub fn authenticate(&self, token: &str) -> Result<Claims, CoreError> {
        self.tokens.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            CoreError::Unauthorized(Message::Unauthorized.to_string())
        })
    }

    /// Public profile of an authenticated user.
    #[must_use]
    pub fn profile(&self, claims: &Claims) -> Profile {
        tracing::debug!(username = %claims.sub, "Fetching profile");
        Profile::from(claims)
    }
}
