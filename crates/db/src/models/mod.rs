//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` DTOs for the create/replace request bodies
//! - Read-side detail structs for queries that join in the owner's username

pub mod moves;
pub mod user;
pub mod workout;
pub mod workout_move;
