//! Exhaustive adversarial search with alpha-beta pruning.
//!
//! Tic-tac-toe's game tree is small enough to search to the leaves
//! every time, so the solver is exact: no heuristics, no depth limit,
//! no transposition table. Pruning only cuts the number of explored
//! nodes; the value returned from any position equals plain minimax.

use crate::action::Action;
use crate::rules::{is_terminal, legal_moves, place, to_move, utility};
use crate::types::{Board, Marker};
use tracing::{debug, instrument};

/// Alpha-beta bound one beyond the utility range.
const INF: i32 = 2;

/// Value and recommended action at a node.
///
/// Terminal nodes carry no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchResult {
    value: i32,
    action: Option<Action>,
}

/// Best value the maximizer (X) can force from this board.
///
/// `alpha` is the best value the maximizer has guaranteed so far,
/// `beta` the minimizer's. Value and best action update only on strict
/// improvement, so the first action reaching a value wins ties;
/// iteration stops once `beta <= alpha`.
fn max_value(board: &Board, mut alpha: i32, beta: i32) -> SearchResult {
    if is_terminal(board) {
        return SearchResult {
            value: utility(board),
            action: None,
        };
    }

    let mut value = -INF;
    let mut best = None;
    for action in legal_moves(board) {
        let child = place(board, action).expect("move drawn from legal_moves");
        let reply = min_value(&child, alpha, beta);
        if reply.value > value {
            value = reply.value;
            best = Some(action);
        }
        alpha = alpha.max(value);
        if beta <= alpha {
            break;
        }
    }

    SearchResult {
        value,
        action: best,
    }
}

/// Best value the minimizer (O) can force from this board.
///
/// Mirror of [`max_value`]: tracks `beta`, prunes identically.
fn min_value(board: &Board, alpha: i32, mut beta: i32) -> SearchResult {
    if is_terminal(board) {
        return SearchResult {
            value: utility(board),
            action: None,
        };
    }

    let mut value = INF;
    let mut best = None;
    for action in legal_moves(board) {
        let child = place(board, action).expect("move drawn from legal_moves");
        let reply = max_value(&child, alpha, beta);
        if reply.value < value {
            value = reply.value;
            best = Some(action);
        }
        beta = beta.min(value);
        if beta <= alpha {
            break;
        }
    }

    SearchResult {
        value,
        action: best,
    }
}

/// Computes the optimal action for the player to move.
///
/// Returns `None` on terminal boards. Otherwise runs the maximizing
/// search when X is to move and the minimizing search when O is,
/// seeded with the full pruning window. Among equally optimal moves
/// the choice is unspecified (it follows [`legal_moves`]'s iteration
/// order), but the guaranteed outcome never is.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Option<Action> {
    if is_terminal(board) {
        return None;
    }

    let result = match to_move(board) {
        Marker::X => max_value(board, -INF, INF),
        Marker::O => min_value(board, -INF, INF),
    };
    debug!(value = result.value, action = ?result.action, "search complete");
    result.action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;
    use std::collections::{HashMap, HashSet};

    const X: Cell = Cell::Marked(Marker::X);
    const O: Cell = Cell::Marked(Marker::O);
    const E: Cell = Cell::Empty;

    /// Reference minimax without pruning, memoized by position.
    fn plain_value(board: &Board, memo: &mut HashMap<Board, i32>) -> i32 {
        if let Some(&value) = memo.get(board) {
            return value;
        }
        let value = if is_terminal(board) {
            utility(board)
        } else {
            let children = legal_moves(board).into_iter().map(|action| {
                let child = place(board, action).unwrap();
                plain_value(&child, memo)
            });
            match to_move(board) {
                Marker::X => children.max().unwrap(),
                Marker::O => children.min().unwrap(),
            }
        };
        memo.insert(board.clone(), value);
        value
    }

    fn collect_reachable(board: &Board, seen: &mut HashSet<Board>) {
        if !seen.insert(board.clone()) {
            return;
        }
        if is_terminal(board) {
            return;
        }
        for action in legal_moves(board) {
            collect_reachable(&place(board, action).unwrap(), seen);
        }
    }

    #[test]
    fn test_terminal_board_has_value_but_no_action() {
        let board = Board::from_cells([[X, X, X], [O, O, E], [E, E, E]]);
        let result = max_value(&board, -INF, INF);
        assert_eq!(result.value, 1);
        assert_eq!(result.action, None);
    }

    #[test]
    fn test_pruning_never_changes_the_value() {
        let mut reachable = HashSet::new();
        collect_reachable(&Board::new(), &mut reachable);

        let mut memo = HashMap::new();
        for board in &reachable {
            let expected = plain_value(board, &mut memo);
            let pruned = match to_move(board) {
                Marker::X => max_value(board, -INF, INF),
                Marker::O => min_value(board, -INF, INF),
            };
            assert_eq!(pruned.value, expected, "disagreement on:\n{board}");
        }
    }

    #[test]
    fn test_maximizer_takes_immediate_win() {
        // X completes the top row whatever else is on offer.
        let board = Board::from_cells([[X, X, E], [O, O, E], [E, E, E]]);
        let result = max_value(&board, -INF, INF);
        assert_eq!(result.value, 1);
    }

    #[test]
    fn test_minimizer_takes_immediate_win() {
        // O completes the middle row (or reaches -1 another way; the
        // guaranteed outcome is what's pinned down, not the move).
        let board = Board::from_cells([[X, X, E], [O, O, E], [E, E, X]]);
        let result = min_value(&board, -INF, INF);
        assert_eq!(result.value, -1);
    }

    #[test]
    fn test_unique_optimal_move_is_returned() {
        // O to move: blocking at (0, 2) holds the draw, every other
        // move hands X the top row. One strictly best move, so the
        // tie-break cannot hide it.
        let board = Board::from_cells([[X, X, E], [E, O, E], [E, E, E]]);
        let result = min_value(&board, -INF, INF);
        assert_eq!(result.value, 0);
        assert_eq!(result.action, Some(Action::new(0, 2)));
    }
}
