//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get,
//! update, delete) for a single resource type, plus the free functions
//! that shape its Mason representations. Handlers resolve path names to
//! rows via the repositories in `planner_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod entry;
pub mod moves;
pub mod users;
pub mod workout_moves;
pub mod workouts;
