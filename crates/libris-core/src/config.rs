//! Application configuration.
//!
//! Loaded once at process start from environment variables (the CLI loads
//! `.env` first) and passed by reference afterwards. Nothing here is mutated
//! after construction.

use std::fmt::Write as _;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://libris.db";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;
pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_HOSTED_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 60;

const REDACTED: &str = "********";
const UNSET: &str = "<unset>";

/// Configuration loading error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} must be a boolean (true/false/1/0/yes/no), got '{value}'")]
    InvalidBool { key: &'static str, value: String },

    #[error("{key} must be a number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    NotPositive { key: &'static str },

    #[error("{backend} model backend is selected but not configured: {missing} must be set")]
    IncompletePrimary {
        backend: &'static str,
        missing: &'static str,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub inference: InferenceConfig,
}

/// Token signing settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

/// Text-generation backend settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Use the local backend as primary (hosted becomes the fallback).
    pub use_local: bool,
    pub local_endpoint: String,
    pub local_model_name: String,
    pub hosted_endpoint: String,
    pub hosted_api_key: String,
    pub hosted_model_name: String,
    /// Upper bound on a single backend request, including streaming.
    pub timeout: Duration,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            use_local: true,
            local_endpoint: DEFAULT_LOCAL_ENDPOINT.to_string(),
            local_model_name: String::new(),
            hosted_endpoint: DEFAULT_HOSTED_ENDPOINT.to_string(),
            hosted_api_key: String::new(),
            hosted_model_name: String::new(),
            timeout: Duration::from_secs(DEFAULT_INFERENCE_TIMEOUT_SECS),
        }
    }
}

impl InferenceConfig {
    /// Whether the local backend has everything it needs.
    #[must_use]
    pub fn local_configured(&self) -> bool {
        !self.local_endpoint.is_empty() && !self.local_model_name.is_empty()
    }

    /// Whether the hosted backend has everything it needs.
    #[must_use]
    pub fn hosted_configured(&self) -> bool {
        !self.hosted_endpoint.is_empty()
            && !self.hosted_api_key.is_empty()
            && !self.hosted_model_name.is_empty()
    }

    /// Whether the non-primary backend can be used as a fallback.
    #[must_use]
    pub fn fallback_available(&self) -> bool {
        if self.use_local {
            self.hosted_configured()
        } else {
            self.local_configured()
        }
    }

    /// Check that the primary backend is complete.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.use_local {
            if self.local_endpoint.is_empty() {
                return Err(ConfigError::IncompletePrimary {
                    backend: "local",
                    missing: "LOCAL_MODEL_ENDPOINT",
                });
            }
            if self.local_model_name.is_empty() {
                return Err(ConfigError::IncompletePrimary {
                    backend: "local",
                    missing: "LOCAL_MODEL_NAME",
                });
            }
        } else {
            for (value, missing) in [
                (&self.hosted_endpoint, "HOSTED_MODEL_ENDPOINT"),
                (&self.hosted_api_key, "HOSTED_MODEL_API_KEY"),
                (&self.hosted_model_name, "HOSTED_MODEL_NAME"),
            ] {
                if value.is_empty() {
                    return Err(ConfigError::IncompletePrimary {
                        backend: "hosted",
                        missing,
                    });
                }
            }
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let token_ttl_minutes = parse_number(
            "JWT_TTL_MINUTES",
            get("JWT_TTL_MINUTES"),
            DEFAULT_TOKEN_TTL_MINUTES,
        )?;
        if token_ttl_minutes <= 0 {
            return Err(ConfigError::NotPositive {
                key: "JWT_TTL_MINUTES",
            });
        }

        let cors_origins = get("LIBRIS_CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let timeout_secs = parse_number(
            "INFERENCE_TIMEOUT_SECS",
            get("INFERENCE_TIMEOUT_SECS"),
            DEFAULT_INFERENCE_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::NotPositive {
                key: "INFERENCE_TIMEOUT_SECS",
            });
        }

        let inference = InferenceConfig {
            use_local: parse_bool("USE_LOCAL_MODEL", get("USE_LOCAL_MODEL"), true)?,
            local_endpoint: get("LOCAL_MODEL_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_LOCAL_ENDPOINT.to_string()),
            local_model_name: get("LOCAL_MODEL_NAME").unwrap_or_default(),
            hosted_endpoint: get("HOSTED_MODEL_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_HOSTED_ENDPOINT.to_string()),
            hosted_api_key: get("HOSTED_MODEL_API_KEY").unwrap_or_default(),
            hosted_model_name: get("HOSTED_MODEL_NAME").unwrap_or_default(),
            timeout: Duration::from_secs(timeout_secs),
        };
        inference.validate()?;

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            auth: AuthConfig {
                jwt_secret,
                token_ttl_minutes,
            },
            server: ServerConfig {
                port: parse_number("LIBRIS_PORT", get("LIBRIS_PORT"), DEFAULT_PORT)?,
                cors_origins,
            },
            inference,
        })
    }

    /// Human-readable dump with secrets masked.
    #[must_use]
    pub fn redacted(&self) -> String {
        let inf = &self.inference;
        let cors = if self.server.cors_origins.is_empty() {
            "*".to_string()
        } else {
            self.server.cors_origins.join(", ")
        };
        let fallback = if inf.fallback_available() {
            if inf.use_local { "hosted" } else { "local" }
        } else {
            "none"
        };

        let mut out = String::new();
        let _ = writeln!(out, "database_url         = {}", self.database_url);
        let _ = writeln!(out, "jwt_secret           = {}", mask(&self.auth.jwt_secret));
        let _ = writeln!(out, "token_ttl_minutes    = {}", self.auth.token_ttl_minutes);
        let _ = writeln!(out, "port                 = {}", self.server.port);
        let _ = writeln!(out, "cors_origins         = {cors}");
        let _ = writeln!(
            out,
            "primary_backend      = {}",
            if inf.use_local { "local" } else { "hosted" }
        );
        let _ = writeln!(out, "fallback_backend     = {fallback}");
        let _ = writeln!(out, "local_endpoint       = {}", or_unset(&inf.local_endpoint));
        let _ = writeln!(out, "local_model_name     = {}", or_unset(&inf.local_model_name));
        let _ = writeln!(out, "hosted_endpoint      = {}", or_unset(&inf.hosted_endpoint));
        let _ = writeln!(out, "hosted_api_key       = {}", mask(&inf.hosted_api_key));
        let _ = writeln!(out, "hosted_model_name    = {}", or_unset(&inf.hosted_model_name));
        let _ = write!(out, "inference_timeout    = {}s", inf.timeout.as_secs());
        out
    }
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() { UNSET } else { REDACTED }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { UNSET } else { value }
}

fn parse_bool(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    raw.map_or(Ok(default), |value| {
        value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value })
    })
}
