//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use libris_axum::{AxumContext, BcryptHasher, CorsConfig, JwtIssuer, create_router};
use libris_core::{ModelOutput, Prompt, TextGenerationPort};
use libris_db::{CoreFactory, setup_test_database};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-secret";

/// Generator that returns a fixed output and records every prompt.
pub struct StubGenerator {
    reply: ModelOutput,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Self::with_output(ModelOutput::Text(text.to_string()))
    }

    pub fn failing() -> Arc<Self> {
        Self::with_output(ModelOutput::NoContent)
    }

    fn with_output(reply: ModelOutput) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerationPort for StubGenerator {
    async fn generate(&self, prompt: &Prompt) -> ModelOutput {
        self.prompts.lock().unwrap().push(prompt.as_str().to_string());
        self.reply.clone()
    }
}

/// Build a router over a fresh in-memory database.
pub async fn test_app(generator: Arc<StubGenerator>) -> Router {
    test_app_with_cors(generator, &CorsConfig::AllowAll).await
}

pub async fn test_app_with_cors(generator: Arc<StubGenerator>, cors: &CorsConfig) -> Router {
    let pool = setup_test_database().await.unwrap();
    let core = CoreFactory::build_app_core(
        pool,
        generator,
        Arc::new(BcryptHasher::with_cost(4)),
        Arc::new(JwtIssuer::new(JWT_SECRET, 30)),
    );
    create_router(AxumContext::new(core), cors)
}

/// Response pieces the tests care about.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Send one request through the router.
///
/// Non-JSON bodies come back as a JSON string.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Register `username` and return a fresh access token.
pub async fn register_and_login(app: &Router, username: &str) -> String {
    let registered = send(
        app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "pw-123456",
        })),
    )
    .await;
    assert_eq!(registered.status, StatusCode::CREATED);

    let login = send(
        app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"username": username, "password": "pw-123456"})),
    )
    .await;
    assert_eq!(login.status, StatusCode::OK);
    login.body["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Create a book and return its ID.
pub async fn create_book(app: &Router, token: &str, title: &str, author: &str) -> i64 {
    let created = send(
        app,
        Method::POST,
        "/books",
        Some(token),
        Some(json!({
            "title": title,
            "author": author,
            "genre": "Science Fiction",
            "year_published": 1965,
            "summary": "A desert planet.",
        })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    created.body["data"]["id"].as_i64().unwrap()
}
