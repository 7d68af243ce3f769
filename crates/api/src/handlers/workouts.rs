//! Handlers for the `/workouts` resource.
//!
//! Workout plans are nested under their creator
//! (`/users/{user}/workouts[/{workout}]`), with a read-only flat
//! collection of every plan at `/workouts`.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use planner_core::error::CoreError;
use planner_db::models::user::User;
use planner_db::models::workout::{CreateWorkout, UpdateWorkout, WorkoutPlanWithCreator};
use planner_db::repositories::{UserRepo, WorkoutRepo};
use serde_json::json;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::mason::{Control, MasonDocument};
use crate::relations::{
    all_workouts_href, user_href, workout_collection_href, workout_href,
    workout_move_collection_href, API_ROOT, LINK_RELATIONS_URL, NAMESPACE,
    WORKOUT_COLLECTION_PROFILE_URL, WORKOUT_PROFILE_URL,
};
use crate::schemas;
use crate::state::AppState;

/// POST /api/users/{user}/workouts
pub async fn create(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidJson(input): ValidJson<CreateWorkout>,
) -> AppResult<impl IntoResponse> {
    let owner = resolve_user(&state, &username).await?;
    let created = WorkoutRepo::create(&state.pool, owner.id, &input).await?;
    tracing::info!(username = %username, name = %created.name, "Workout plan created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, workout_href(&username, &created.name))],
    ))
}

/// GET /api/users/{user}/workouts
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<MasonDocument> {
    let owner = resolve_user(&state, &username).await?;
    let plans = WorkoutRepo::list_by_owner(&state.pool, owner.id).await?;

    let mut body = MasonDocument::new();
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control("self", Control::href(workout_collection_href(&username)));
    body.add_control("profile", Control::href(WORKOUT_COLLECTION_PROFILE_URL));
    body.add_control("up", Control::titled(user_href(&username), "Up"));
    body.add_control_post(
        "planner:add-workout",
        "Add a workout",
        workout_collection_href(&username),
        schemas::workout_schema(),
    );

    for plan in plans {
        body.add_item(workout_item(&plan));
    }
    Ok(body)
}

/// GET /api/workouts -- every plan by every user.
pub async fn list_all(State(state): State<AppState>) -> AppResult<MasonDocument> {
    let plans = WorkoutRepo::list_all(&state.pool).await?;

    let mut body = MasonDocument::new();
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control("self", Control::href(all_workouts_href()));
    body.add_control("profile", Control::href(WORKOUT_COLLECTION_PROFILE_URL));
    body.add_control("up", Control::titled(API_ROOT, "Up"));

    for plan in plans {
        body.add_item(workout_item(&plan));
    }
    Ok(body)
}

/// GET /api/users/{user}/workouts/{workout}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path((username, workout)): Path<(String, String)>,
) -> AppResult<MasonDocument> {
    let owner = resolve_user(&state, &username).await?;
    let plan = WorkoutRepo::find_by_name_and_owner(&state.pool, &workout, owner.id)
        .await?
        .ok_or(CoreError::not_found("Workout plan", &workout))?;

    let mut body = MasonDocument::represent(json!({
        "name": plan.name,
        "creator": owner.username,
    }));
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control("self", Control::href(workout_href(&username, &plan.name)));
    body.add_control("profile", Control::href(WORKOUT_PROFILE_URL));
    body.add_control(
        "collection",
        Control::titled(all_workouts_href(), "All workouts"),
    );
    body.add_control("up", Control::titled(workout_collection_href(&username), "Up"));
    body.add_control(
        "planner:workout-moves-by",
        Control::titled(
            workout_move_collection_href(&username, &plan.name),
            "Moves in this workout",
        ),
    );
    body.add_control_post(
        "planner:add-workout-move",
        "Add a move to this workout",
        workout_move_collection_href(&username, &plan.name),
        schemas::workout_move_schema(),
    );
    body.add_control_put(
        "edit",
        "Rename this workout",
        workout_href(&username, &plan.name),
        schemas::workout_schema(),
    );
    body.add_control_delete(
        "planner:delete",
        "Delete this workout",
        workout_href(&username, &plan.name),
    );
    Ok(body)
}

/// PUT /api/users/{user}/workouts/{workout}
pub async fn update(
    State(state): State<AppState>,
    Path((username, workout)): Path<(String, String)>,
    ValidJson(input): ValidJson<UpdateWorkout>,
) -> AppResult<impl IntoResponse> {
    let owner = resolve_user(&state, &username).await?;
    let plan = WorkoutRepo::find_by_name_and_owner(&state.pool, &workout, owner.id)
        .await?
        .ok_or(CoreError::not_found("Workout plan", &workout))?;

    let updated = WorkoutRepo::update(&state.pool, plan.id, &input)
        .await?
        .ok_or(CoreError::not_found("Workout plan", &workout))?;

    Ok((
        StatusCode::OK,
        [(header::LOCATION, workout_href(&username, &updated.name))],
    ))
}

/// DELETE /api/users/{user}/workouts/{workout}
///
/// The plan's move list items go with it.
pub async fn delete(
    State(state): State<AppState>,
    Path((username, workout)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let owner = resolve_user(&state, &username).await?;
    let plan = WorkoutRepo::find_by_name_and_owner(&state.pool, &workout, owner.id)
        .await?
        .ok_or(CoreError::not_found("Workout plan", &workout))?;

    WorkoutRepo::delete(&state.pool, plan.id).await?;
    tracing::info!(username = %username, name = %workout, "Workout plan deleted");
    Ok(StatusCode::OK)
}

/// Short-form item for workout collections.
fn workout_item(plan: &WorkoutPlanWithCreator) -> MasonDocument {
    let mut item = MasonDocument::represent(json!({ "name": plan.name }));
    item.add_control("self", Control::href(workout_href(&plan.creator, &plan.name)));
    item
}

/// Resolve a path username to its row, 404ing on a ghost segment.
async fn resolve_user(state: &AppState, username: &str) -> AppResult<User> {
    Ok(UserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or(CoreError::not_found("User", username))?)
}
