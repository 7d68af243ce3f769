pub mod health;
pub mod moves;
pub mod users;
pub mod workouts;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                            Mason entry point
///
/// /users                                       list, create
/// /users/{user}                                get, rename, delete
/// /users/{user}/moves                          list, create
/// /users/{user}/moves/{move}                   get, update, delete
/// /users/{user}/workouts                       list, create
/// /users/{user}/workouts/{workout}             get, rename, delete
/// /users/{user}/workouts/{workout}/moves       list (ordered), attach
/// /users/{user}/workouts/{workout}/moves/{position}
///                                              get, replace/reorder, detach
///
/// /moves                                       all moves, read-only
/// /workouts                                    all workout plans, read-only
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::entry::entry_point))
        .nest("/users", users::router())
        .nest("/moves", moves::router())
        .nest("/workouts", workouts::router())
}
