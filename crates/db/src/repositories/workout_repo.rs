//! Repository for the `workout_plans` table.

use planner_core::types::DbId;
use sqlx::PgPool;

use crate::models::workout::{CreateWorkout, UpdateWorkout, WorkoutPlan, WorkoutPlanWithCreator};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, created_at, updated_at";

/// Column list for queries that join in the creator's username.
const DETAIL_COLUMNS: &str = "w.name, u.username AS creator";

/// Provides CRUD operations for workout plans.
pub struct WorkoutRepo;

impl WorkoutRepo {
    /// Insert a new workout plan for the given owner, returning the
    /// created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateWorkout,
    ) -> Result<WorkoutPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_plans (user_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutPlan>(&query)
            .bind(user_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a plan by its per-owner unique (name, user_id) key.
    pub async fn find_by_name_and_owner(
        pool: &PgPool,
        name: &str,
        user_id: DbId,
    ) -> Result<Option<WorkoutPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_plans WHERE name = $1 AND user_id = $2");
        sqlx::query_as::<_, WorkoutPlan>(&query)
            .bind(name)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List one user's plans with the creator's username, ordered by name.
    pub async fn list_by_owner(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<WorkoutPlanWithCreator>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM workout_plans w
             JOIN users u ON u.id = w.user_id
             WHERE w.user_id = $1
             ORDER BY w.name"
        );
        sqlx::query_as::<_, WorkoutPlanWithCreator>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all plans across all owners, ordered by creator then name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<WorkoutPlanWithCreator>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM workout_plans w
             JOIN users u ON u.id = w.user_id
             ORDER BY u.username, w.name"
        );
        sqlx::query_as::<_, WorkoutPlanWithCreator>(&query)
            .fetch_all(pool)
            .await
    }

    /// Rename a workout plan.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorkout,
    ) -> Result<Option<WorkoutPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE workout_plans SET name = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutPlan>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a workout plan. Its move list items cascade with it.
    ///
    /// Returns `true` if the row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workout_plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
