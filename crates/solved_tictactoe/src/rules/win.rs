//! Win detection for tic-tac-toe.

use crate::action::Action;
use crate::types::{Board, Cell, Marker};
use tracing::instrument;

/// Every winning line, in scan order: rows 0-2, columns 0-2, the main
/// diagonal, the anti-diagonal. The order is observable (see
/// [`winner`]) and must not be reshuffled.
const LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(2, 0), Action::new(1, 1), Action::new(0, 2)],
];

/// Checks if there is a winner on the board.
///
/// Returns the marker of the first complete line found by scanning
/// rows, then columns, then diagonals, each in index order. Boards
/// with two complete lines of different markers are unreachable under
/// alternating play; on such boards the scan order decides which
/// marker is reported. Turn legality is not validated here.
#[instrument]
pub fn winner(board: &Board) -> Option<Marker> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Some(Cell::Marked(marker)) = cell {
            if board.get(b) == cell && board.get(c) == cell {
                return Some(marker);
            }
        }
    }
    None
}
