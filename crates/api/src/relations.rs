//! Link relations, profile addresses and canonical hrefs.
//!
//! All custom link relations live under the `planner` namespace prefix;
//! the profile URLs are plain documentation addresses embedded in
//! `profile` controls.

/// Namespace prefix for custom link relations.
pub const NAMESPACE: &str = "planner";

/// Where the namespace's link relations are documented.
pub const LINK_RELATIONS_URL: &str = "/link-relations/";

/// Root of the API tree.
pub const API_ROOT: &str = "/api";

pub const USER_PROFILE_URL: &str = "/profiles/user/";
pub const MOVE_PROFILE_URL: &str = "/profiles/move/";
pub const WORKOUT_PROFILE_URL: &str = "/profiles/workout/";
pub const WORKOUT_MOVE_PROFILE_URL: &str = "/profiles/workout-move/";

pub const USER_COLLECTION_PROFILE_URL: &str = "/profiles/user-collection/";
pub const MOVE_COLLECTION_PROFILE_URL: &str = "/profiles/move-collection/";
pub const WORKOUT_COLLECTION_PROFILE_URL: &str = "/profiles/workout-collection/";
pub const WORKOUT_MOVE_COLLECTION_PROFILE_URL: &str = "/profiles/workout-move-collection/";

// ---------------------------------------------------------------------------
// Canonical addresses
// ---------------------------------------------------------------------------

pub fn user_collection_href() -> String {
    format!("{API_ROOT}/users")
}

pub fn user_href(user: &str) -> String {
    format!("{API_ROOT}/users/{user}")
}

pub fn move_collection_href(user: &str) -> String {
    format!("{API_ROOT}/users/{user}/moves")
}

pub fn all_moves_href() -> String {
    format!("{API_ROOT}/moves")
}

pub fn move_href(user: &str, name: &str) -> String {
    format!("{API_ROOT}/users/{user}/moves/{name}")
}

pub fn workout_collection_href(user: &str) -> String {
    format!("{API_ROOT}/users/{user}/workouts")
}

pub fn all_workouts_href() -> String {
    format!("{API_ROOT}/workouts")
}

pub fn workout_href(user: &str, workout: &str) -> String {
    format!("{API_ROOT}/users/{user}/workouts/{workout}")
}

pub fn workout_move_collection_href(user: &str, workout: &str) -> String {
    format!("{API_ROOT}/users/{user}/workouts/{workout}/moves")
}

pub fn workout_move_href(user: &str, workout: &str, position: i32) -> String {
    format!("{API_ROOT}/users/{user}/workouts/{workout}/moves/{position}")
}
