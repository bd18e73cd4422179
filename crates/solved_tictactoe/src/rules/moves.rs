//! Legal-move enumeration and the board transition function.

use super::turn::to_move;
use crate::action::{Action, InvalidAction};
use crate::invariants;
use crate::types::Board;
use std::collections::HashSet;
use tracing::instrument;

/// Returns the set of coordinates holding an empty cell.
///
/// The set is unordered and iteration order is not part of the
/// contract. An empty set means the board is full.
#[instrument]
pub fn legal_moves(board: &Board) -> HashSet<Action> {
    let mut moves = HashSet::new();
    for row in 0..3 {
        for col in 0..3 {
            let action = Action::new(row, col);
            if board.is_empty(action) {
                moves.insert(action);
            }
        }
    }
    moves
}

/// Returns the board that results from playing `action`.
///
/// The marker placed is whichever [`to_move`] reports for the input
/// board. Validation happens before any copy or write, and the input
/// board is never modified.
///
/// # Errors
///
/// [`InvalidAction::OutOfBounds`] if a coordinate falls outside the
/// grid, [`InvalidAction::Occupied`] if the cell is taken — together,
/// exactly the actions not in [`legal_moves`].
#[instrument(skip(board))]
pub fn place(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    if !action.in_bounds() {
        return Err(InvalidAction::OutOfBounds(action));
    }
    if !board.is_empty(action) {
        return Err(InvalidAction::Occupied(action));
    }

    let marker = to_move(board);
    let mut next = board.clone();
    next.set(action, marker);
    debug_assert!(invariants::marks_balanced(&next));
    Ok(next)
}

/// Replays a recorded move list from the empty board.
///
/// Markers alternate implicitly through [`to_move`], so the record is
/// just coordinates. The first illegal move aborts the replay.
///
/// # Errors
///
/// Propagates the [`InvalidAction`] of the offending move.
#[instrument]
pub fn replay(actions: &[Action]) -> Result<Board, InvalidAction> {
    let mut board = Board::new();
    for &action in actions {
        board = place(&board, action)?;
    }
    Ok(board)
}
