//! Route definitions for the flat `/moves` collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::moves;
use crate::state::AppState;

/// Routes mounted at `/moves`.
///
/// Read-only: creating a move requires naming its owner, so POST only
/// exists on the per-user collection (other verbs here get a 405).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(moves::list_all))
}
