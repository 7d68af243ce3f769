//! HTTP-level tests for the error taxonomy: 400/404/405/409/415 and the
//! Mason error document shape.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, get, post_json, post_raw, seed_user};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_to_readonly_collection_returns_405(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/moves", serde_json::json!({"name": "X"})).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_to_workouts_collection_returns_405(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/workouts", serde_json::json!({"name": "X"})).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_content_type_returns_415(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/users", r#"{"username": "Noob"}"#, None).await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wrong_content_type_returns_415(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(
        app,
        "/api/users",
        "username=Noob",
        Some("application/x-www-form-urlencoded"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(
        app,
        "/api/users",
        r#"{"username": "#,
        Some("application/json"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_required_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/users", serde_json::json!({"name": "wrong key"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overlong_username_returns_400_with_field_path(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/users",
        serde_json::json!({"username": "x".repeat(65)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let details = json["@error"]["@messages"][0].as_str().unwrap();
    assert!(details.contains("username"), "got: {details}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_repetitions_returns_400(pool: PgPool) {
    seed_user(&pool, "Noob").await;
    common::seed_move(&pool, "Noob", "Plank", "Hold").await;
    common::seed_workout(&pool, "Noob", "Core").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/users/Noob/workouts/Core/moves",
        serde_json::json!({"move_name": "Plank", "move_creator": "Noob", "repetitions": -1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_error_body_is_mason_error_document(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/users/ghost").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/vnd.mason+json"
    );

    let json = body_json(response).await;
    assert_eq!(json["@error"]["@message"], "Not found");
    let details = json["@error"]["@messages"][0].as_str().unwrap();
    assert!(details.contains("ghost"), "got: {details}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_conflict_body_names_the_constraint(pool: PgPool) {
    seed_user(&pool, "Noob").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/users", serde_json::json!({"username": "Noob"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["@error"]["@message"], "Conflict");
    let details = json["@error"]["@messages"][0].as_str().unwrap();
    assert!(details.contains("uq_users_username"), "got: {details}");
}
