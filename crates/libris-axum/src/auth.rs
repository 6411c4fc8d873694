//! Credential adapters and the bearer-token middleware.
//!
//! - [`BcryptHasher`] implements [`PasswordHasherPort`] with bcrypt.
//! - [`JwtIssuer`] implements [`TokenIssuerPort`] with HS256 JWTs.
//! - [`require_auth`] guards protected routes: it verifies the
//!   `Authorization: Bearer <token>` header and inserts the token's
//!   [`Claims`] into request extensions for handlers to extract.

use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use libris_core::{Claims, CredentialError, Message, PasswordHasherPort, TokenIssuerPort};

use crate::error::HttpError;
use crate::state::AppState;

/// bcrypt password hasher.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with an explicit work factor (4..=31).
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasherPort for BcryptHasher {
    async fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| CredentialError::Hashing(format!("hashing task failed: {e}")))?
            .map_err(|e| CredentialError::Hashing(e.to_string()))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| CredentialError::Hashing(format!("verify task failed: {e}")))?;

        match result {
            Ok(matches) => Ok(matches),
            // A stored value that is not a bcrypt hash never matches.
            Err(bcrypt::BcryptError::InvalidHash(_) | bcrypt::BcryptError::InvalidPrefix(_)) => {
                Ok(false)
            }
            Err(e) => Err(CredentialError::Hashing(e.to_string())),
        }
    }
}

/// HS256 token issuer with a fixed lifetime.
pub struct JwtIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_minutes: i64,
}

impl JwtIssuer {
    /// Create an issuer signing with `secret`; tokens expire after `ttl_minutes`.
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl_minutes,
        }
    }
}

impl std::fmt::Debug for JwtIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIssuer")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish_non_exhaustive()
    }
}

impl TokenIssuerPort for JwtIssuer {
    fn issue(&self, mut claims: Claims) -> Result<String, CredentialError> {
        claims.exp = Utc::now()
            .timestamp()
            .saturating_add(self.ttl_minutes.saturating_mul(60));
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| CredentialError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Claims, CredentialError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| CredentialError::InvalidToken(e.to_string()))
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Middleware that rejects requests without a valid access token.
///
/// On success the verified [`Claims`] are available to handlers through
/// `Extension<Claims>`.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, HttpError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token);

    let Some(token) = token else {
        tracing::debug!(path = %req.uri().path(), "Missing bearer token");
        return Err(HttpError::Unauthorized(Message::Unauthorized.to_string()));
    };

    let claims = state.core.users().authenticate(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
