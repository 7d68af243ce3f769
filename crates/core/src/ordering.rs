//! Position arithmetic for ordered move lists.
//!
//! A workout plan's moves carry a dense, zero-based `position` sequence:
//! after any mutation the stored positions are exactly `0..count`, no gaps,
//! no duplicates. The functions here decide where a requested position
//! lands; the repository layer performs the corresponding row shifts.
//!
//! Clamping is deliberately uniform: any out-of-range request — negative or
//! past the end — appends rather than erroring. There is no symmetric
//! "before zero means prepend" rule.

/// Resolve the slot for a new item inserted into a list of `count` items.
///
/// `None` and out-of-range values append (slot `count`). A requested value
/// in `0..count` is an insertion point: the item at that position and
/// everything after it shift up by one.
pub fn insert_slot(requested: Option<i32>, count: i32) -> i32 {
    match requested {
        Some(p) if (0..count).contains(&p) => p,
        _ => count,
    }
}

/// Resolve the target slot when moving an existing item within a list of
/// `count` items (`count` is unchanged by a move, and is at least 1 since
/// the moved item exists).
///
/// Out-of-range values move the item to the end (slot `count - 1`).
pub fn move_slot(requested: i32, count: i32) -> i32 {
    if (0..count).contains(&requested) {
        requested
    } else {
        count - 1
    }
}
