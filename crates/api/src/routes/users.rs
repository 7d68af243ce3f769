//! Route definitions for the `/users` subtree, including the per-user
//! moves, workouts and workout-move-list sub-resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{moves, users, workout_moves, workouts};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                                     list
/// POST   /                                     create
/// GET    /{user}                               get_by_username
/// PUT    /{user}                               update
/// DELETE /{user}                               delete
///
/// GET    /{user}/moves                         list_by_user
/// POST   /{user}/moves                         create
/// GET    /{user}/moves/{move}                  get_by_name
/// PUT    /{user}/moves/{move}                  update
/// DELETE /{user}/moves/{move}                  delete
///
/// GET    /{user}/workouts                      list_by_user
/// POST   /{user}/workouts                      create
/// GET    /{user}/workouts/{workout}            get_by_name
/// PUT    /{user}/workouts/{workout}            update
/// DELETE /{user}/workouts/{workout}            delete
///
/// GET    /{user}/workouts/{workout}/moves                list
/// POST   /{user}/workouts/{workout}/moves                create
/// GET    /{user}/workouts/{workout}/moves/{position}     get_by_position
/// PUT    /{user}/workouts/{workout}/moves/{position}     update
/// DELETE /{user}/workouts/{workout}/moves/{position}     delete
/// ```
pub fn router() -> Router<AppState> {
    let workout_move_routes = Router::new()
        .route("/", get(workout_moves::list).post(workout_moves::create))
        .route(
            "/{position}",
            get(workout_moves::get_by_position)
                .put(workout_moves::update)
                .delete(workout_moves::delete),
        );

    let workout_routes = Router::new()
        .route("/", get(workouts::list_by_user).post(workouts::create))
        .route(
            "/{workout}",
            get(workouts::get_by_name)
                .put(workouts::update)
                .delete(workouts::delete),
        )
        .nest("/{workout}/moves", workout_move_routes);

    let move_routes = Router::new()
        .route("/", get(moves::list_by_user).post(moves::create))
        .route(
            "/{move}",
            get(moves::get_by_name)
                .put(moves::update)
                .delete(moves::delete),
        );

    Router::new()
        .route("/", get(users::list).post(users::create))
        .route(
            "/{user}",
            get(users::get_by_username)
                .put(users::update)
                .delete(users::delete),
        )
        .nest("/{user}/moves", move_routes)
        .nest("/{user}/workouts", workout_routes)
}
