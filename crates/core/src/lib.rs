//! Shared domain types for the workout planner.
//!
//! Holds the pieces that both the database layer and the HTTP layer depend
//! on: ID/timestamp aliases, the domain error taxonomy, and the pure
//! position arithmetic for ordered move lists.

pub mod error;
pub mod ordering;
pub mod types;
