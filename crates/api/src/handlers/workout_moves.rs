//! Handlers for the ordered move list of a workout plan.
//!
//! These cover `/users/{user}/workouts/{workout}/moves[/{position}]`. The
//! `{position}` segment is the item's zero-based array index in the plan,
//! not a durable id: a reflow caused by a later insert, move or delete
//! changes which item a position refers to.
//!
//! The request body names the move by (move_name, move_creator); the move
//! does not have to belong to the plan's owner.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use planner_core::error::CoreError;
use planner_db::models::moves::Move;
use planner_db::models::workout::WorkoutPlan;
use planner_db::models::workout_move::{NewWorkoutMove, UpdateWorkoutMove, WorkoutMoveDetail};
use planner_db::repositories::{MoveRepo, UserRepo, WorkoutMoveRepo, WorkoutRepo};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::mason::{Control, MasonDocument};
use crate::relations::{
    move_href, workout_href, workout_move_collection_href, workout_move_href, LINK_RELATIONS_URL,
    NAMESPACE, WORKOUT_MOVE_COLLECTION_PROFILE_URL, WORKOUT_MOVE_PROFILE_URL,
};
use crate::schemas;
use crate::state::AppState;

/// Request body shared by POST (attach) and PUT (replace).
///
/// `position` is deliberately unconstrained: out-of-range values clamp to
/// append instead of failing validation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutMoveRequest {
    #[validate(length(min = 1, max = 64))]
    pub move_name: String,
    #[validate(length(min = 1, max = 64))]
    pub move_creator: String,
    #[validate(range(min = 0))]
    pub repetitions: Option<i32>,
    pub position: Option<i32>,
}

/// POST /api/users/{user}/workouts/{workout}/moves
pub async fn create(
    State(state): State<AppState>,
    Path((username, workout)): Path<(String, String)>,
    ValidJson(input): ValidJson<WorkoutMoveRequest>,
) -> AppResult<impl IntoResponse> {
    let plan = resolve_plan(&state, &username, &workout).await?;
    let referenced = resolve_move(&state, &input.move_creator, &input.move_name).await?;

    let item = WorkoutMoveRepo::insert(
        &state.pool,
        &NewWorkoutMove {
            plan_id: plan.id,
            move_id: referenced.id,
            repetitions: input.repetitions,
            position: input.position,
        },
    )
    .await?;

    tracing::info!(
        username = %username,
        workout = %workout,
        position = item.position,
        "Workout move attached"
    );
    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            workout_move_href(&username, &workout, item.position),
        )],
    ))
}

/// GET /api/users/{user}/workouts/{workout}/moves
pub async fn list(
    State(state): State<AppState>,
    Path((username, workout)): Path<(String, String)>,
) -> AppResult<MasonDocument> {
    let plan = resolve_plan(&state, &username, &workout).await?;
    let items = WorkoutMoveRepo::list_by_plan(&state.pool, plan.id).await?;

    let mut body = MasonDocument::new();
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control(
        "self",
        Control::href(workout_move_collection_href(&username, &workout)),
    );
    body.add_control(
        "profile",
        Control::href(WORKOUT_MOVE_COLLECTION_PROFILE_URL),
    );
    body.add_control("up", Control::titled(workout_href(&username, &workout), "Up"));
    body.add_control_post(
        "planner:add-workout-move",
        "Add a move to this workout",
        workout_move_collection_href(&username, &workout),
        schemas::workout_move_schema(),
    );

    for item in items {
        body.add_item(workout_move_item(&username, &workout, &item));
    }
    Ok(body)
}

/// GET /api/users/{user}/workouts/{workout}/moves/{position}
pub async fn get_by_position(
    State(state): State<AppState>,
    Path((username, workout, position)): Path<(String, String, i32)>,
) -> AppResult<MasonDocument> {
    let plan = resolve_plan(&state, &username, &workout).await?;
    let item = WorkoutMoveRepo::find_detail(&state.pool, plan.id, position)
        .await?
        .ok_or(CoreError::not_found("Workout move", position.to_string()))?;

    let self_href = workout_move_href(&username, &workout, item.position);
    let mut body = MasonDocument::represent(json!({
        "move_name": item.move_name,
        "move_creator": item.move_creator,
        "repetitions": item.repetitions,
        "position": item.position,
    }));
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control("self", Control::href(self_href.clone()));
    body.add_control("profile", Control::href(WORKOUT_MOVE_PROFILE_URL));
    body.add_control(
        "up",
        Control::titled(workout_move_collection_href(&username, &workout), "Up"),
    );
    body.add_control(
        "planner:workout",
        Control::titled(
            workout_href(&username, &workout),
            "The workout this move is part of",
        ),
    );
    body.add_control(
        "planner:move",
        Control::titled(
            move_href(&item.move_creator, &item.move_name),
            "The move itself",
        ),
    );
    body.add_control_put(
        "edit",
        "Edit this workout move",
        self_href.clone(),
        schemas::workout_move_schema(),
    );
    body.add_control_delete("planner:delete", "Delete this workout move", self_href);
    Ok(body)
}

/// PUT /api/users/{user}/workouts/{workout}/moves/{position}
///
/// Full replace: the move reference is re-resolved from the body, an
/// absent `repetitions` clears the stored value, and an absent `position`
/// keeps the item where it is. A differing `position` reflows the list.
pub async fn update(
    State(state): State<AppState>,
    Path((username, workout, position)): Path<(String, String, i32)>,
    ValidJson(input): ValidJson<WorkoutMoveRequest>,
) -> AppResult<impl IntoResponse> {
    let plan = resolve_plan(&state, &username, &workout).await?;
    let referenced = resolve_move(&state, &input.move_creator, &input.move_name).await?;

    let updated = WorkoutMoveRepo::update(
        &state.pool,
        plan.id,
        position,
        &UpdateWorkoutMove {
            move_id: referenced.id,
            repetitions: input.repetitions,
            position: input.position,
        },
    )
    .await?
    .ok_or(CoreError::not_found("Workout move", position.to_string()))?;

    Ok((
        StatusCode::OK,
        [(
            header::LOCATION,
            workout_move_href(&username, &workout, updated.position),
        )],
    ))
}

/// DELETE /api/users/{user}/workouts/{workout}/moves/{position}
///
/// Items past the removed position compact down by one.
pub async fn delete(
    State(state): State<AppState>,
    Path((username, workout, position)): Path<(String, String, i32)>,
) -> AppResult<StatusCode> {
    let plan = resolve_plan(&state, &username, &workout).await?;

    let removed = WorkoutMoveRepo::delete(&state.pool, plan.id, position).await?;
    if !removed {
        return Err(CoreError::not_found("Workout move", position.to_string()).into());
    }

    tracing::info!(
        username = %username,
        workout = %workout,
        position,
        "Workout move detached"
    );
    Ok(StatusCode::OK)
}

/// Short-form item for the move list collection.
fn workout_move_item(username: &str, workout: &str, item: &WorkoutMoveDetail) -> MasonDocument {
    let mut doc = MasonDocument::represent(json!({
        "move_name": item.move_name,
        "repetitions": item.repetitions,
        "position": item.position,
    }));
    doc.add_control(
        "self",
        Control::href(workout_move_href(username, workout, item.position)),
    );
    doc
}

/// Resolve the {user}/{workout} path pair to the plan row, 404ing on
/// whichever segment fails first.
async fn resolve_plan(state: &AppState, username: &str, workout: &str) -> AppResult<WorkoutPlan> {
    let owner = UserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or(CoreError::not_found("User", username))?;
    Ok(
        WorkoutRepo::find_by_name_and_owner(&state.pool, workout, owner.id)
            .await?
            .ok_or(CoreError::not_found("Workout plan", workout))?,
    )
}

/// Resolve the body's (move_creator, move_name) pair to the move row.
async fn resolve_move(state: &AppState, creator: &str, name: &str) -> AppResult<Move> {
    let owner = UserRepo::find_by_username(&state.pool, creator)
        .await?
        .ok_or(CoreError::not_found("User", creator))?;
    Ok(
        MoveRepo::find_by_name_and_owner(&state.pool, name, owner.id)
            .await?
            .ok_or(CoreError::not_found("Move", name))?,
    )
}
