//! Integration tests for the HTTP routes.
//!
//! Each test builds the full router over a fresh in-memory database and a
//! stub text generator, then drives it with `tower::ServiceExt::oneshot`.

mod common;

use axum::http::{Method, StatusCode, header};
use serde_json::json;

use common::{StubGenerator, create_book, register_and_login, send, test_app};

#[tokio::test]
async fn health_check_is_public() {
    let app = test_app(StubGenerator::failing()).await;

    let response = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "OK");
}

// =============================================================================
// Accounts
// =============================================================================

#[tokio::test]
async fn register_rejects_taken_username() {
    let app = test_app(StubGenerator::failing()).await;
    register_and_login(&app, "alice").await;

    let again = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({"username": "alice", "email": "other@example.com", "password": "x"})),
    )
    .await;

    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.body["message"], "Username already registered");
    assert_eq!(again.body["data"], serde_json::Value::Null);
}

#[tokio::test]
async fn login_returns_bearer_token() {
    let app = test_app(StubGenerator::failing()).await;
    register_and_login(&app, "alice").await;

    let login = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"username": "alice", "password": "pw-123456"})),
    )
    .await;

    assert_eq!(login.body["status"], 200);
    assert_eq!(login.body["message"], "User logged in successfully");
    assert_eq!(login.body["data"]["token_type"], "bearer");
    assert!(login.body["data"]["access_token"].as_str().unwrap().len() > 20);
}

#[tokio::test]
async fn login_with_bad_credentials_is_rejected() {
    let app = test_app(StubGenerator::failing()).await;
    register_and_login(&app, "alice").await;

    for (username, password) in [("alice", "wrong"), ("nobody", "pw-123456")] {
        let login = send(
            &app,
            Method::POST,
            "/auth/login",
            None,
            Some(json!({"username": username, "password": password})),
        )
        .await;
        assert_eq!(login.status, StatusCode::BAD_REQUEST);
        assert_eq!(login.body["message"], "Invalid credentials");
    }
}

#[tokio::test]
async fn malformed_body_is_unprocessable() {
    let app = test_app(StubGenerator::failing()).await;

    let response = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({"username": "alice"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["status"], 422);
}

#[tokio::test]
async fn profile_requires_token() {
    let app = test_app(StubGenerator::failing()).await;

    let response = send(&app, Method::GET, "/auth/profile", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers[header::WWW_AUTHENTICATE], "Bearer");
    assert_eq!(response.body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn profile_rejects_forged_token() {
    let app = test_app(StubGenerator::failing()).await;

    let response = send(&app, Method::GET, "/auth/profile", Some("not.a.jwt"), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_returns_caller_identity() {
    let app = test_app(StubGenerator::failing()).await;
    let token = register_and_login(&app, "alice").await;

    let response = send(&app, Method::GET, "/auth/profile", Some(&token), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"],
        json!({"username": "alice", "role": "user"})
    );
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn book_routes_require_token() {
    let app = test_app(StubGenerator::failing()).await;

    for (method, uri) in [
        (Method::GET, "/books"),
        (Method::GET, "/books/1"),
        (Method::DELETE, "/books/1"),
        (Method::GET, "/books/recommendations"),
        (Method::GET, "/books/1/reviews"),
    ] {
        let response = send(&app, method, uri, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn book_crud_lifecycle() {
    let app = test_app(StubGenerator::failing()).await;
    let token = register_and_login(&app, "alice").await;

    let id = create_book(&app, &token, "Dune", "Frank Herbert").await;

    let listed = send(&app, Method::GET, "/books", Some(&token), None).await;
    assert_eq!(listed.body["message"], "Books retrieved successfully");
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 1);

    let fetched = send(&app, Method::GET, &format!("/books/{id}"), Some(&token), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["title"], "Dune");

    let updated = send(
        &app,
        Method::PUT,
        &format!("/books/{id}"),
        Some(&token),
        Some(json!({
            "title": "Dune Messiah",
            "author": "Frank Herbert",
            "genre": "Science Fiction",
            "year_published": 1969,
            "summary": "The sequel.",
        })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["id"], id);
    assert_eq!(updated.body["data"]["year_published"], 1969);

    let deleted = send(&app, Method::DELETE, &format!("/books/{id}"), Some(&token), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Book deleted successfully");
    assert_eq!(deleted.body["data"], serde_json::Value::Null);

    let gone = send(&app, Method::GET, &format!("/books/{id}"), Some(&token), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["message"], "Book not found");
}

#[tokio::test]
async fn duplicate_book_conflicts() {
    let app = test_app(StubGenerator::failing()).await;
    let token = register_and_login(&app, "alice").await;
    create_book(&app, &token, "Dune", "Frank Herbert").await;

    let duplicate = send(
        &app,
        Method::POST,
        "/books",
        Some(&token),
        Some(json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "Other",
            "year_published": 2000,
            "summary": "",
        })),
    )
    .await;

    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.body["message"], "Book already exists");
}

#[tokio::test]
async fn missing_book_is_not_found_for_update_and_delete() {
    let app = test_app(StubGenerator::failing()).await;
    let token = register_and_login(&app, "alice").await;

    let update = send(
        &app,
        Method::PUT,
        "/books/999",
        Some(&token),
        Some(json!({
            "title": "T",
            "author": "A",
            "genre": "G",
            "year_published": 1,
            "summary": "S",
        })),
    )
    .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = send(&app, Method::DELETE, "/books/999", Some(&token), None).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_book_id_is_bad_request_envelope() {
    let app = test_app(StubGenerator::failing()).await;
    let token = register_and_login(&app, "alice").await;

    for (method, uri) in [
        (Method::GET, "/books/abc"),
        (Method::DELETE, "/books/abc"),
        (Method::GET, "/books/abc/reviews"),
    ] {
        let response = send(&app, method, uri, Some(&token), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response.body["status"], 400, "{uri}");
        assert!(response.body["message"].is_string(), "{uri}");
        assert_eq!(response.body["data"], serde_json::Value::Null, "{uri}");
    }
}

// =============================================================================
// Reviews
// =============================================================================

#[tokio::test]
async fn reviews_and_summary() {
    let app = test_app(StubGenerator::failing()).await;
    let token = register_and_login(&app, "alice").await;
    let id = create_book(&app, &token, "Dune", "Frank Herbert").await;

    for (text, rating) in [("Loved it", 5), ("Good", 4)] {
        let added = send(
            &app,
            Method::POST,
            &format!("/books/{id}/reviews"),
            Some(&token),
            Some(json!({"review_text": text, "rating": rating})),
        )
        .await;
        assert_eq!(added.status, StatusCode::CREATED);
        assert_eq!(added.body["data"]["book_id"], id);
    }

    let listed = send(
        &app,
        Method::GET,
        &format!("/books/{id}/reviews"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(listed.status, StatusCode::OK);
    let reviews = listed.body["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["review_text"], "Loved it");

    let summary = send(
        &app,
        Method::GET,
        &format!("/books/{id}/summary"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(summary.status, StatusCode::OK);
    assert_eq!(summary.body["data"]["average_rating"], 4.5);
    assert_eq!(summary.body["data"]["total_reviews"], 2);
}

#[tokio::test]
async fn review_with_out_of_range_rating_is_rejected() {
    let app = test_app(StubGenerator::failing()).await;
    let token = register_and_login(&app, "alice").await;
    let id = create_book(&app, &token, "Dune", "Frank Herbert").await;

    let response = send(
        &app,
        Method::POST,
        &format!("/books/{id}/reviews"),
        Some(&token),
        Some(json!({"review_text": "meh", "rating": 6})),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Rating must be between 1 and 5");
}

#[tokio::test]
async fn review_for_missing_book_is_not_found() {
    let app = test_app(StubGenerator::failing()).await;
    let token = register_and_login(&app, "alice").await;

    let response = send(
        &app,
        Method::POST,
        "/books/42/reviews",
        Some(&token),
        Some(json!({"review_text": "?", "rating": 3})),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn summary_of_unreviewed_book_averages_zero() {
    let app = test_app(StubGenerator::failing()).await;
    let token = register_and_login(&app, "alice").await;
    let id = create_book(&app, &token, "Dune", "Frank Herbert").await;

    let summary = send(
        &app,
        Method::GET,
        &format!("/books/{id}/summary"),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(summary.body["data"]["average_rating"], 0.0);
    assert_eq!(summary.body["data"]["total_reviews"], 0);
}

// =============================================================================
// Assistant
// =============================================================================

#[tokio::test]
async fn recommendations_are_structured_when_parseable() {
    let generator = StubGenerator::replying(
        "Sure! {\"recommendations\": [{\"title\": \"Hyperion\", \"author\": \"Dan Simmons\"}]}",
    );
    let app = test_app(generator.clone()).await;
    let token = register_and_login(&app, "alice").await;
    let id = create_book(&app, &token, "Dune", "Frank Herbert").await;
    send(
        &app,
        Method::POST,
        &format!("/books/{id}/reviews"),
        Some(&token),
        Some(json!({"review_text": "Great", "rating": 5})),
    )
    .await;

    let response = send(&app, Method::GET, "/books/recommendations", Some(&token), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Recommendations generated successfully"
    );
    assert_eq!(
        response.body["data"]["recommendations"][0]["title"],
        "Hyperion"
    );
    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Dune by Frank Herbert"));
}

#[tokio::test]
async fn recommendations_fall_back_to_raw_text() {
    let app = test_app(StubGenerator::replying("Try reading Hyperion.")).await;
    let token = register_and_login(&app, "alice").await;

    let response = send(&app, Method::GET, "/books/recommendations", Some(&token), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], "Try reading Hyperion.");
}

#[tokio::test]
async fn generation_failure_is_bad_request() {
    let app = test_app(StubGenerator::failing()).await;
    let token = register_and_login(&app, "alice").await;

    let response = send(&app, Method::GET, "/books/recommendations", Some(&token), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Failed to generate content");
}

#[tokio::test]
async fn generate_summary_for_text() {
    let generator = StubGenerator::replying("Short.");
    let app = test_app(generator.clone()).await;
    let token = register_and_login(&app, "alice").await;

    let response = send(
        &app,
        Method::POST,
        "/books/generate-summary",
        Some(&token),
        Some(json!({"content": "A very long text"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!({"summary": "Short."}));
    assert!(generator.prompts()[0].contains("A very long text"));
}

#[tokio::test]
async fn generate_summary_by_book_id() {
    let generator = StubGenerator::replying("Spice.");
    let app = test_app(generator.clone()).await;
    let token = register_and_login(&app, "alice").await;
    let id = create_book(&app, &token, "Dune", "Frank Herbert").await;

    let response = send(
        &app,
        Method::POST,
        &format!("/books/generate-summary-by-book-id/{id}"),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!({"book_id": id, "summary": "Spice."}));
    assert!(generator.prompts()[0].contains("Dune by Frank Herbert"));

    let missing = send(
        &app,
        Method::POST,
        "/books/generate-summary-by-book-id/999",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn generate_summary_by_book_name_decodes_path() {
    let generator = StubGenerator::replying("A classic.");
    let app = test_app(generator.clone()).await;
    let token = register_and_login(&app, "alice").await;

    let response = send(
        &app,
        Method::GET,
        "/books/generate-summary-by-book-name/War%20and%20Peace",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"],
        json!({"book_name": "War and Peace", "summary": "A classic."})
    );
}
