//! The API entry point document.

use crate::mason::{Control, MasonDocument};
use crate::relations::{
    all_moves_href, all_workouts_href, user_collection_href, API_ROOT, LINK_RELATIONS_URL,
    NAMESPACE,
};

/// GET /api -- the root document from which everything else is reachable.
pub async fn entry_point() -> MasonDocument {
    let mut body = MasonDocument::new();
    body.add_namespace(NAMESPACE, LINK_RELATIONS_URL);
    body.add_control("self", Control::href(API_ROOT));
    body.add_control(
        "planner:users-all",
        Control::titled(user_collection_href(), "All users"),
    );
    body.add_control(
        "planner:moves-all",
        Control::titled(all_moves_href(), "All moves"),
    );
    body.add_control(
        "planner:workouts-all",
        Control::titled(all_workouts_href(), "All workout plans"),
    );
    body
}
