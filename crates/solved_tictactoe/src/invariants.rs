//! Board-consistency checks.
//!
//! Boards reachable under alternating play keep their mark counts
//! balanced. The checks here back `debug_assert!`s in the transition
//! function; they are not a runtime error path.

use crate::types::{Board, Marker};
use tracing::warn;

/// Invariant: O never leads X, and X leads by at most one.
pub fn marks_balanced(board: &Board) -> bool {
    let x = board.count(Marker::X);
    let o = board.count(Marker::O);

    let balanced = o <= x && x - o <= 1;
    if !balanced {
        warn!(x, o, "mark counts out of balance");
    }
    balanced
}
