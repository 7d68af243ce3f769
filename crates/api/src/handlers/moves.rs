//! Handlers for the `/moves` resource.
//!
//! Moves are nested under their creator
//! (`/users/{user}/moves[/{move}]`), with a read-only flat collection of
//! every move at `/moves`.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use planner_core::error::CoreError;
use planner_db::models::moves::{CreateMove, MoveWithCreator, UpdateMove};
use planner_db::models::user::User;
use planner_db::repositories::{MoveRepo, UserRepo};
use serde_json::json;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::mason::{Control, MasonDocument};
use crate::relations::{
    all_moves_href, move_collection_href, move_href, user_href, API_ROOT, LINK_RELATIONS_URL,
    MOVE_COLLECTION_PROFILE_URL, MOVE_PROFILE_URL, NAMESPACE,
};
use crate::schemas;
use crate::state::AppState;

/// POST /api/users/{user}/moves
pub async fn create(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidJson(input): ValidJson<CreateMove>,
) -> AppResult<impl IntoResponse> {
    let owner = resolve_user(&state, &username).await?;
    let created = MoveRepo::create(&state.pool, owner.id, &input).await?;
    tracing::info!(username = %username, name = %created.name, "Move created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, move_href(&username, &created.name))],
    ))
}

/// GET /api/users/{user}/moves
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<MasonDocument> {
    let owner = resolve_user(&state, &username).await?;
    let moves = MoveRepo::list_by_owner(&state.pool, owner.id).await?;

    let mut body = MasonDocument::new();
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control("self", Control::href(move_collection_href(&username)));
    body.add_control("profile", Control::href(MOVE_COLLECTION_PROFILE_URL));
    body.add_control("up", Control::titled(user_href(&username), "Up"));
    body.add_control_post(
        "planner:add-move",
        "Add a new move",
        move_collection_href(&username),
        schemas::move_schema(),
    );

    for m in moves {
        body.add_item(move_item(&m));
    }
    Ok(body)
}

/// GET /api/moves -- every move by every user.
pub async fn list_all(State(state): State<AppState>) -> AppResult<MasonDocument> {
    let moves = MoveRepo::list_all(&state.pool).await?;

    let mut body = MasonDocument::new();
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control("self", Control::href(all_moves_href()));
    body.add_control("profile", Control::href(MOVE_COLLECTION_PROFILE_URL));
    body.add_control("up", Control::titled(API_ROOT, "Up"));

    for m in moves {
        body.add_item(move_item(&m));
    }
    Ok(body)
}

/// GET /api/users/{user}/moves/{move}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path((username, move_name)): Path<(String, String)>,
) -> AppResult<MasonDocument> {
    let owner = resolve_user(&state, &username).await?;
    let found = MoveRepo::find_by_name_and_owner(&state.pool, &move_name, owner.id)
        .await?
        .ok_or(CoreError::not_found("Move", &move_name))?;

    let mut body = MasonDocument::represent(json!({
        "name": found.name,
        "description": found.description,
        "creator": owner.username,
    }));
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control("self", Control::href(move_href(&username, &found.name)));
    body.add_control("profile", Control::href(MOVE_PROFILE_URL));
    body.add_control("up", Control::titled(move_collection_href(&username), "Up"));
    body.add_control(
        "collection",
        Control::titled(all_moves_href(), "All moves"),
    );
    body.add_control_put(
        "edit",
        "Edit this move",
        move_href(&username, &found.name),
        schemas::move_schema(),
    );
    body.add_control_delete(
        "planner:delete",
        "Delete this move",
        move_href(&username, &found.name),
    );
    Ok(body)
}

/// PUT /api/users/{user}/moves/{move}
pub async fn update(
    State(state): State<AppState>,
    Path((username, move_name)): Path<(String, String)>,
    ValidJson(input): ValidJson<UpdateMove>,
) -> AppResult<impl IntoResponse> {
    let owner = resolve_user(&state, &username).await?;
    let found = MoveRepo::find_by_name_and_owner(&state.pool, &move_name, owner.id)
        .await?
        .ok_or(CoreError::not_found("Move", &move_name))?;

    let updated = MoveRepo::update(&state.pool, found.id, &input)
        .await?
        .ok_or(CoreError::not_found("Move", &move_name))?;

    Ok((
        StatusCode::OK,
        [(header::LOCATION, move_href(&username, &updated.name))],
    ))
}

/// DELETE /api/users/{user}/moves/{move}
///
/// Rejected with a conflict while any workout plan still references the
/// move.
pub async fn delete(
    State(state): State<AppState>,
    Path((username, move_name)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let owner = resolve_user(&state, &username).await?;
    let found = MoveRepo::find_by_name_and_owner(&state.pool, &move_name, owner.id)
        .await?
        .ok_or(CoreError::not_found("Move", &move_name))?;

    MoveRepo::delete(&state.pool, found.id).await?;
    tracing::info!(username = %username, name = %move_name, "Move deleted");
    Ok(StatusCode::OK)
}

/// Short-form item for move collections.
fn move_item(m: &MoveWithCreator) -> MasonDocument {
    let mut item = MasonDocument::represent(json!({
        "name": m.name,
        "description": m.description,
    }));
    item.add_control("self", Control::href(move_href(&m.creator, &m.name)));
    item
}

/// Resolve a path username to its row, 404ing on a ghost segment.
async fn resolve_user(state: &AppState, username: &str) -> AppResult<User> {
    Ok(UserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or(CoreError::not_found("User", username))?)
}
