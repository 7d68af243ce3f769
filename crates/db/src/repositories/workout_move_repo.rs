//! Repository for the `workout_moves` table: the ordered move list of a
//! workout plan.
//!
//! Every mutation here must preserve the dense position invariant: the
//! stored positions for a plan are exactly `0..count` after commit. Each
//! operation runs in a single transaction that first locks the owning plan
//! row, so concurrent edits of the same plan are linearized while edits of
//! different plans never wait on each other. The deferred unique
//! constraint on (plan_id, position) is the backstop: any interleaving
//! that would corrupt the sequence aborts at commit instead of persisting.

use planner_core::ordering;
use planner_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::workout_move::{
    NewWorkoutMove, UpdateWorkoutMove, WorkoutMove, WorkoutMoveDetail,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, plan_id, move_id, position, repetitions, created_at, updated_at";

/// Column list for queries that join in the move's name and creator.
const DETAIL_COLUMNS: &str =
    "m.name AS move_name, u.username AS move_creator, wm.position, wm.repetitions";

/// Provides the ordered-list operations for a plan's workout moves.
pub struct WorkoutMoveRepo;

impl WorkoutMoveRepo {
    /// Attach a move to a plan at the requested position.
    ///
    /// An absent or out-of-range position appends; an in-range position is
    /// an insertion point, shifting the tail of the list up by one.
    pub async fn insert(pool: &PgPool, input: &NewWorkoutMove) -> Result<WorkoutMove, sqlx::Error> {
        let mut tx = pool.begin().await?;

        Self::lock_plan(&mut tx, input.plan_id).await?;
        let count = Self::count_inner(&mut tx, input.plan_id).await?;
        let position = ordering::insert_slot(input.position, count);

        Self::shift_up_from(&mut tx, input.plan_id, position, None).await?;

        let query = format!(
            "INSERT INTO workout_moves (plan_id, move_id, position, repetitions)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, WorkoutMove>(&query)
            .bind(input.plan_id)
            .bind(input.move_id)
            .bind(position)
            .bind(input.repetitions)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            plan_id = input.plan_id,
            position = item.position,
            "Workout move inserted"
        );
        Ok(item)
    }

    /// Replace the item at `position`: its move reference, repetitions and
    /// (optionally) its slot in the list.
    ///
    /// A requested position equal to the current one, or absent, changes no
    /// other item. Otherwise the list closes the gap at the old position
    /// and opens one at the (clamped) new position.
    ///
    /// Returns `None` if the plan has no item at `position`.
    pub async fn update(
        pool: &PgPool,
        plan_id: DbId,
        position: i32,
        input: &UpdateWorkoutMove,
    ) -> Result<Option<WorkoutMove>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        Self::lock_plan(&mut tx, plan_id).await?;

        let query = format!("SELECT {COLUMNS} FROM workout_moves WHERE plan_id = $1 AND position = $2");
        let Some(item) = sqlx::query_as::<_, WorkoutMove>(&query)
            .bind(plan_id)
            .bind(position)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let target = match input.position {
            Some(requested) if requested != position => {
                let count = Self::count_inner(&mut tx, plan_id).await?;
                // Close the gap the item leaves behind, then open one at
                // the clamped target. The moved row itself is excluded
                // from the second shift.
                sqlx::query(
                    "UPDATE workout_moves SET position = position - 1, updated_at = NOW()
                     WHERE plan_id = $1 AND position > $2",
                )
                .bind(plan_id)
                .bind(position)
                .execute(&mut *tx)
                .await?;

                let target = ordering::move_slot(requested, count);
                Self::shift_up_from(&mut tx, plan_id, target, Some(item.id)).await?;
                target
            }
            _ => position,
        };

        let query = format!(
            "UPDATE workout_moves
             SET move_id = $2, repetitions = $3, position = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, WorkoutMove>(&query)
            .bind(item.id)
            .bind(input.move_id)
            .bind(input.repetitions)
            .bind(target)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            plan_id,
            from = position,
            to = updated.position,
            "Workout move updated"
        );
        Ok(Some(updated))
    }

    /// Detach the item at `position`, compacting the tail of the list down
    /// by one to close the gap.
    ///
    /// Returns `true` if an item was removed.
    pub async fn delete(pool: &PgPool, plan_id: DbId, position: i32) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        Self::lock_plan(&mut tx, plan_id).await?;

        let result = sqlx::query("DELETE FROM workout_moves WHERE plan_id = $1 AND position = $2")
            .bind(plan_id)
            .bind(position)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(
            "UPDATE workout_moves SET position = position - 1, updated_at = NOW()
             WHERE plan_id = $1 AND position > $2",
        )
        .bind(plan_id)
        .bind(position)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(plan_id, position, "Workout move deleted");
        Ok(true)
    }

    /// List a plan's items with move name and creator, ordered by position.
    pub async fn list_by_plan(
        pool: &PgPool,
        plan_id: DbId,
    ) -> Result<Vec<WorkoutMoveDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM workout_moves wm
             JOIN moves m ON m.id = wm.move_id
             JOIN users u ON u.id = m.user_id
             WHERE wm.plan_id = $1
             ORDER BY wm.position"
        );
        sqlx::query_as::<_, WorkoutMoveDetail>(&query)
            .bind(plan_id)
            .fetch_all(pool)
            .await
    }

    /// Find the item at `position` with move name and creator.
    pub async fn find_detail(
        pool: &PgPool,
        plan_id: DbId,
        position: i32,
    ) -> Result<Option<WorkoutMoveDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM workout_moves wm
             JOIN moves m ON m.id = wm.move_id
             JOIN users u ON u.id = m.user_id
             WHERE wm.plan_id = $1 AND wm.position = $2"
        );
        sqlx::query_as::<_, WorkoutMoveDetail>(&query)
            .bind(plan_id)
            .bind(position)
            .fetch_optional(pool)
            .await
    }

    /// Count the items in a plan.
    pub async fn count(pool: &PgPool, plan_id: DbId) -> Result<i32, sqlx::Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM workout_moves WHERE plan_id = $1")
                .bind(plan_id)
                .fetch_one(pool)
                .await?;
        Ok(count as i32)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Take a row lock on the owning plan, linearizing concurrent edits of
    /// the same list. Fails with `RowNotFound` if the plan is gone.
    async fn lock_plan(
        tx: &mut Transaction<'_, Postgres>,
        plan_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM workout_plans WHERE id = $1 FOR UPDATE")
            .bind(plan_id)
            .fetch_optional(&mut **tx)
            .await?
            .map(|_| ())
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Count within the current transaction.
    async fn count_inner(
        tx: &mut Transaction<'_, Postgres>,
        plan_id: DbId,
    ) -> Result<i32, sqlx::Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM workout_moves WHERE plan_id = $1")
                .bind(plan_id)
                .fetch_one(&mut **tx)
                .await?;
        Ok(count as i32)
    }

    /// Shift every item at or after `from` up by one, opening a gap.
    /// `exclude` skips the row being moved during a reflow.
    async fn shift_up_from(
        tx: &mut Transaction<'_, Postgres>,
        plan_id: DbId,
        from: i32,
        exclude: Option<DbId>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE workout_moves SET position = position + 1, updated_at = NOW()
             WHERE plan_id = $1 AND position >= $2 AND ($3::BIGINT IS NULL OR id <> $3)",
        )
        .bind(plan_id)
        .bind(from)
        .bind(exclude)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
