//! Workout move (move list item) entity model and DTOs.
//!
//! A workout move is one positioned occurrence of a move inside a workout
//! plan. Positions are dense and zero-based per plan: at all times the
//! stored positions for a plan are exactly `0..count`. The item has no
//! identity outside its plan; clients address it by position, which is an
//! array index rather than a durable key.

use planner_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `workout_moves` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutMove {
    pub id: DbId,
    pub plan_id: DbId,
    pub move_id: DbId,
    pub position: i32,
    pub repetitions: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A workout move joined with the referenced move's name and its creator's
/// username, matching how the HTTP layer represents list items.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutMoveDetail {
    pub move_name: String,
    pub move_creator: String,
    pub position: i32,
    pub repetitions: Option<i32>,
}

/// Resolved input for attaching a move to a plan. `position` is the
/// client-requested slot; `None` or out-of-range values append.
#[derive(Debug, Clone)]
pub struct NewWorkoutMove {
    pub plan_id: DbId,
    pub move_id: DbId,
    pub repetitions: Option<i32>,
    pub position: Option<i32>,
}

/// Resolved input for replacing the item at a given position. `position`
/// here is the requested *new* slot; `None` keeps the current one.
#[derive(Debug, Clone)]
pub struct UpdateWorkoutMove {
    pub move_id: DbId,
    pub repetitions: Option<i32>,
    pub position: Option<i32>,
}
