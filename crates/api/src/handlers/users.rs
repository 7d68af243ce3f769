//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use planner_core::error::CoreError;
use planner_db::models::user::{CreateUser, UpdateUser, User};
use planner_db::repositories::UserRepo;
use serde_json::json;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::mason::{Control, MasonDocument};
use crate::relations::{
    move_collection_href, user_collection_href, user_href, workout_collection_href, API_ROOT,
    LINK_RELATIONS_URL, NAMESPACE, USER_COLLECTION_PROFILE_URL, USER_PROFILE_URL,
};
use crate::schemas;
use crate::state::AppState;

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(username = %user.username, "User created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, user_href(&user.username))],
    ))
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<MasonDocument> {
    let users = UserRepo::list(&state.pool).await?;

    let mut body = MasonDocument::new();
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control("self", Control::href(user_collection_href()));
    body.add_control("profile", Control::href(USER_COLLECTION_PROFILE_URL));
    body.add_control("up", Control::titled(API_ROOT, "Up"));
    body.add_control_post(
        "planner:add-user",
        "Add a new user",
        user_collection_href(),
        schemas::user_schema(),
    );

    for user in users {
        body.add_item(user_item(&user));
    }
    Ok(body)
}

/// GET /api/users/{user}
pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<MasonDocument> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(CoreError::not_found("User", &username))?;

    let mut body = MasonDocument::represent(json!({ "username": user.username }));
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control("self", Control::href(user_href(&user.username)));
    body.add_control("profile", Control::href(USER_PROFILE_URL));
    body.add_control("up", Control::titled(user_collection_href(), "Up"));
    body.add_control(
        "planner:moves-by",
        Control::titled(move_collection_href(&user.username), "Moves by this user"),
    );
    body.add_control(
        "planner:workouts-by",
        Control::titled(
            workout_collection_href(&user.username),
            "Workout plans by this user",
        ),
    );
    body.add_control_put(
        "edit",
        "Rename this user",
        user_href(&user.username),
        schemas::user_schema(),
    );
    body.add_control_delete(
        "planner:delete",
        "Delete this user",
        user_href(&user.username),
    );
    Ok(body)
}

/// PUT /api/users/{user}
pub async fn update(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidJson(input): ValidJson<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(CoreError::not_found("User", &username))?;

    let updated = UserRepo::update(&state.pool, user.id, &input)
        .await?
        .ok_or(CoreError::not_found("User", &username))?;

    Ok((
        StatusCode::OK,
        [(header::LOCATION, user_href(&updated.username))],
    ))
}

/// DELETE /api/users/{user}
///
/// The user's moves and plans go with them; the delete is rejected with a
/// conflict if one of their moves is still referenced from another
/// user's plan.
pub async fn delete(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<StatusCode> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(CoreError::not_found("User", &username))?;

    UserRepo::delete(&state.pool, user.id).await?;
    tracing::info!(username = %username, "User deleted");
    Ok(StatusCode::OK)
}

/// Short-form item for the user collection.
fn user_item(user: &User) -> MasonDocument {
    let mut item = MasonDocument::represent(json!({ "username": user.username }));
    item.add_control("self", Control::href(user_href(&user.username)));
    item
}
