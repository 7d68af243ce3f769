//! Move entity model and DTOs.
//!
//! A move is a reusable exercise definition owned by a user; its name is
//! unique per owner, not globally.

use planner_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `moves` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Move {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A move joined with its creator's username, for representations that
/// address moves by name rather than surrogate id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MoveWithCreator {
    pub name: String,
    pub description: String,
    pub creator: String,
}

/// Request body for creating a move.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMove {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(length(min = 1, max = 256))]
    pub description: String,
}

/// Request body for replacing a move. Same shape as [`CreateMove`]; both
/// fields are required because PUT is a full replace.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMove {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(length(min = 1, max = 256))]
    pub description: String,
}
