//! Workout plan entity model and DTOs.

use planner_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `workout_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutPlan {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A workout plan joined with its creator's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutPlanWithCreator {
    pub name: String,
    pub creator: String,
}

/// Request body for creating a workout plan.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkout {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

/// Request body for renaming a workout plan.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWorkout {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}
