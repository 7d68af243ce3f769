//! Integration tests for the entity repositories.
//!
//! Exercises the repository layer against a real database:
//! - Unique constraint scoping (global usernames, per-owner names)
//! - Cascade and restrict behaviour on deletes
//! - Update and scoped list operations

use planner_db::models::moves::{CreateMove, UpdateMove};
use planner_db::models::user::{CreateUser, UpdateUser};
use planner_db::models::workout::CreateWorkout;
use planner_db::models::workout_move::NewWorkoutMove;
use planner_db::repositories::{MoveRepo, UserRepo, WorkoutMoveRepo, WorkoutRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
    }
}

fn new_move(name: &str, description: &str) -> CreateMove {
    CreateMove {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn new_workout(name: &str) -> CreateWorkout {
    CreateWorkout {
        name: name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("ProAthlete35"))
        .await
        .unwrap();
    assert_eq!(user.username, "ProAthlete35");

    let found = UserRepo::find_by_username(&pool, "ProAthlete35")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, user.id);

    assert!(UserRepo::find_by_username(&pool, "ghost")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("Noob")).await.unwrap();
    let result = UserRepo::create(&pool, &new_user("Noob")).await;
    assert!(result.is_err(), "Duplicate username should fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Before")).await.unwrap();

    let updated = UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            username: "After".to_string(),
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");
    assert_eq!(updated.username, "After");

    assert!(UserRepo::find_by_username(&pool, "Before")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_user_returns_none(pool: PgPool) {
    let result = UserRepo::update(
        &pool,
        999_999,
        &UpdateUser {
            username: "Ghost".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_users_ordered_by_username(pool: PgPool) {
    UserRepo::create(&pool, &new_user("zeta")).await.unwrap();
    UserRepo::create(&pool, &new_user("alpha")).await.unwrap();

    let users = UserRepo::list(&pool).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "alpha");
    assert_eq!(users[1].username, "zeta");
}

// ---------------------------------------------------------------------------
// Moves
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_move_names_scoped_per_owner(pool: PgPool) {
    let u1 = UserRepo::create(&pool, &new_user("A")).await.unwrap();
    let u2 = UserRepo::create(&pool, &new_user("B")).await.unwrap();

    MoveRepo::create(&pool, u1.id, &new_move("Push Up", "Push your body up"))
        .await
        .unwrap();

    // Same name under a different owner is fine.
    MoveRepo::create(&pool, u2.id, &new_move("Push Up", "Push your body up"))
        .await
        .unwrap();

    // Same (name, owner) pair is not.
    let result = MoveRepo::create(&pool, u1.id, &new_move("Push Up", "Again")).await;
    assert!(result.is_err(), "Duplicate (name, user_id) should fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_moves_scoped_to_owner(pool: PgPool) {
    let u1 = UserRepo::create(&pool, &new_user("A")).await.unwrap();
    let u2 = UserRepo::create(&pool, &new_user("B")).await.unwrap();

    MoveRepo::create(&pool, u1.id, &new_move("Plank", "Hold still"))
        .await
        .unwrap();
    MoveRepo::create(&pool, u1.id, &new_move("Squat", "Bend your knees"))
        .await
        .unwrap();
    MoveRepo::create(&pool, u2.id, &new_move("Lunge", "Step forward"))
        .await
        .unwrap();

    let u1_moves = MoveRepo::list_by_owner(&pool, u1.id).await.unwrap();
    assert_eq!(u1_moves.len(), 2);
    assert!(u1_moves.iter().all(|m| m.creator == "A"));

    let all_moves = MoveRepo::list_all(&pool).await.unwrap();
    assert_eq!(all_moves.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_move(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("A")).await.unwrap();
    let m = MoveRepo::create(&pool, user.id, &new_move("Push Up", "Old description"))
        .await
        .unwrap();

    let updated = MoveRepo::update(
        &pool,
        m.id,
        &UpdateMove {
            name: "Push Up Plus".to_string(),
            description: "New description".to_string(),
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");

    assert_eq!(updated.name, "Push Up Plus");
    assert_eq!(updated.description, "New description");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_move_in_use_rejected(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("A")).await.unwrap();
    let m = MoveRepo::create(&pool, user.id, &new_move("Push Up", "Up"))
        .await
        .unwrap();
    let plan = WorkoutRepo::create(&pool, user.id, &new_workout("Morning"))
        .await
        .unwrap();
    WorkoutMoveRepo::insert(
        &pool,
        &NewWorkoutMove {
            plan_id: plan.id,
            move_id: m.id,
            repetitions: None,
            position: None,
        },
    )
    .await
    .unwrap();

    let result = MoveRepo::delete(&pool, m.id).await;
    assert!(result.is_err(), "Deleting a referenced move should fail");

    // Once detached, the delete goes through.
    WorkoutMoveRepo::delete(&pool, plan.id, 0).await.unwrap();
    assert!(MoveRepo::delete(&pool, m.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Workout plans
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_workout_names_scoped_per_owner(pool: PgPool) {
    let u1 = UserRepo::create(&pool, &new_user("A")).await.unwrap();
    let u2 = UserRepo::create(&pool, &new_user("B")).await.unwrap();

    WorkoutRepo::create(&pool, u1.id, &new_workout("Light Exercise"))
        .await
        .unwrap();
    WorkoutRepo::create(&pool, u2.id, &new_workout("Light Exercise"))
        .await
        .unwrap();

    let result = WorkoutRepo::create(&pool, u1.id, &new_workout("Light Exercise")).await;
    assert!(result.is_err(), "Duplicate (name, user_id) should fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_workout_cascades_to_items(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("A")).await.unwrap();
    let m = MoveRepo::create(&pool, user.id, &new_move("Plank", "Hold"))
        .await
        .unwrap();
    let plan = WorkoutRepo::create(&pool, user.id, &new_workout("Core"))
        .await
        .unwrap();

    WorkoutMoveRepo::insert(
        &pool,
        &NewWorkoutMove {
            plan_id: plan.id,
            move_id: m.id,
            repetitions: Some(3),
            position: None,
        },
    )
    .await
    .unwrap();

    assert!(WorkoutRepo::delete(&pool, plan.id).await.unwrap());

    // The item went with the plan, so the move is deletable again.
    assert!(MoveRepo::delete(&pool, m.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_user_cascades_to_owned_entities(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("A")).await.unwrap();
    let m = MoveRepo::create(&pool, user.id, &new_move("Plank", "Hold"))
        .await
        .unwrap();
    let plan = WorkoutRepo::create(&pool, user.id, &new_workout("Core"))
        .await
        .unwrap();
    WorkoutMoveRepo::insert(
        &pool,
        &NewWorkoutMove {
            plan_id: plan.id,
            move_id: m.id,
            repetitions: None,
            position: None,
        },
    )
    .await
    .unwrap();

    // The user's own plan references the user's own move; the whole
    // subtree goes in one statement.
    assert!(UserRepo::delete(&pool, user.id).await.unwrap());

    assert!(MoveRepo::find_by_name_and_owner(&pool, "Plank", user.id)
        .await
        .unwrap()
        .is_none());
    assert!(WorkoutRepo::find_by_name_and_owner(&pool, "Core", user.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_user_blocked_by_foreign_reference(pool: PgPool) {
    let creator = UserRepo::create(&pool, &new_user("Creator")).await.unwrap();
    let borrower = UserRepo::create(&pool, &new_user("Borrower")).await.unwrap();

    let m = MoveRepo::create(&pool, creator.id, &new_move("Push Up", "Up"))
        .await
        .unwrap();
    let plan = WorkoutRepo::create(&pool, borrower.id, &new_workout("Borrowed"))
        .await
        .unwrap();
    WorkoutMoveRepo::insert(
        &pool,
        &NewWorkoutMove {
            plan_id: plan.id,
            move_id: m.id,
            repetitions: None,
            position: None,
        },
    )
    .await
    .unwrap();

    // Borrower's plan still references Creator's move.
    let result = UserRepo::delete(&pool, creator.id).await;
    assert!(
        result.is_err(),
        "Deleting a user whose move is referenced elsewhere should fail"
    );
}
