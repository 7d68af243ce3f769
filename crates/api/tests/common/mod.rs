//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the same router + middleware stack as `main.rs` and drives it
//! with `tower::ServiceExt::oneshot`, so no TCP listener is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use planner_api::config::ServerConfig;
use planner_api::router::build_app_router;
use planner_api::state::AppState;

/// The application as built for tests: the full router wrapped in
/// trailing-slash normalization, exactly as production serves it.
pub type TestApp = NormalizePath<Router>;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> TestApp {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: TestApp, path: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: TestApp, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json(app: TestApp, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("PUT")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: TestApp, path: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw body with an arbitrary (or no) content type, for media-type
/// and malformed-body tests.
pub async fn post_raw(
    app: TestApp,
    path: &str,
    body: &str,
    content_type: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method("POST").uri(path);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Seed a user over HTTP and assert it was created.
pub async fn seed_user(pool: &PgPool, username: &str) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/users",
        serde_json::json!({ "username": username }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Seed a move for a user over HTTP.
pub async fn seed_move(pool: &PgPool, username: &str, name: &str, description: &str) {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/users/{username}/moves"),
        serde_json::json!({ "name": name, "description": description }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Seed a workout plan for a user over HTTP.
pub async fn seed_workout(pool: &PgPool, username: &str, name: &str) {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/users/{username}/workouts"),
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
