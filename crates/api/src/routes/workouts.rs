//! Route definitions for the flat `/workouts` collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::workouts;
use crate::state::AppState;

/// Routes mounted at `/workouts`.
///
/// Read-only: creating a plan requires naming its owner, so POST only
/// exists on the per-user collection (other verbs here get a 405).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(workouts::list_all))
}
