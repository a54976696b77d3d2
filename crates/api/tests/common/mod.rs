//! Shared harness for the HTTP-level integration tests.
//!
//! Builds the same router and middleware stack as `main.rs` and provides
//! request/response helpers plus fake upstream catalogs bound to
//! ephemeral local ports.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use shelfmark_api::config::ServerConfig;
use shelfmark_api::router::build_app_router;
use shelfmark_api::state::AppState;
use shelfmark_catalog::{Enricher, GoogleBooksClient, OpenLibraryClient};

/// Unroutable upstream base URL. Nothing listens on port 1, so catalog
/// calls fail with a fast connection refusal instead of a timeout and
/// enrichment degrades to empty fields.
pub const DEAD_UPSTREAM: &str = "http://127.0.0.1:1";

/// Build a test `ServerConfig` with safe defaults.
///
/// Both catalog base URLs point at [`DEAD_UPSTREAM`]; tests that need a
/// live upstream spawn a fake one and override the URL.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        reading_goal: 50,
        openlibrary_base_url: DEAD_UPSTREAM.to_string(),
        google_books_base_url: DEAD_UPSTREAM.to_string(),
        google_books_api_key: None,
    }
}

/// Build the full application router with the default test config.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the full application router with all middleware layers, using
/// the given config.
///
/// This mirrors the state and router construction in `main.rs` so
/// integration tests exercise the same stack that production uses.
pub fn build_test_app_with(pool: SqlitePool, config: ServerConfig) -> Router {
    let enricher = Enricher::new(
        OpenLibraryClient::new(config.openlibrary_base_url.clone()),
        GoogleBooksClient::new(
            config.google_books_base_url.clone(),
            config.google_books_api_key.clone(),
        ),
    );

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        enricher: Arc::new(enricher),
    };

    build_app_router(state, &config)
}

/// Serve the given router on an ephemeral local port for the remainder
/// of the test, returning its base URL. Used to fake upstream catalogs.
pub async fn spawn_fake_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    request(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response {
    request(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    request(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    request(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    request(app, Method::DELETE, uri, None).await
}

/// Send a request with a raw body and optional content type, for tests
/// that deliberately violate the JSON contract.
pub async fn post_raw(
    app: Router,
    uri: &str,
    body: &str,
    content_type: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(CONTENT_TYPE, ct);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

async fn request(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
