//! Repository for the `moves` table.

use planner_core::types::DbId;
use sqlx::PgPool;

use crate::models::moves::{CreateMove, Move, MoveWithCreator, UpdateMove};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, created_at, updated_at";

/// Column list for queries that join in the creator's username.
const DETAIL_COLUMNS: &str = "m.name, m.description, u.username AS creator";

/// Provides CRUD operations for moves.
pub struct MoveRepo;

impl MoveRepo {
    /// Insert a new move for the given owner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateMove,
    ) -> Result<Move, sqlx::Error> {
        let query = format!(
            "INSERT INTO moves (user_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Move>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a move by its per-owner unique (name, user_id) key.
    pub async fn find_by_name_and_owner(
        pool: &PgPool,
        name: &str,
        user_id: DbId,
    ) -> Result<Option<Move>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM moves WHERE name = $1 AND user_id = $2");
        sqlx::query_as::<_, Move>(&query)
            .bind(name)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List one user's moves with the creator's username, ordered by name.
    pub async fn list_by_owner(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<MoveWithCreator>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM moves m
             JOIN users u ON u.id = m.user_id
             WHERE m.user_id = $1
             ORDER BY m.name"
        );
        sqlx::query_as::<_, MoveWithCreator>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all moves across all owners, ordered by creator then name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MoveWithCreator>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM moves m
             JOIN users u ON u.id = m.user_id
             ORDER BY u.username, m.name"
        );
        sqlx::query_as::<_, MoveWithCreator>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace a move's name and description.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMove,
    ) -> Result<Option<Move>, sqlx::Error> {
        let query = format!(
            "UPDATE moves SET name = $2, description = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Move>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a move. Fails with a foreign-key violation if any workout
    /// plan still references it.
    ///
    /// Returns `true` if the row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM moves WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
