//! Pure tic-tac-toe game logic with an exhaustive alpha-beta solver.
//!
//! The crate has two layers:
//!
//! - **Rules**: pure functions over [`Board`] values — [`to_move`],
//!   [`legal_moves`], [`place`], [`winner`], [`is_terminal`],
//!   [`utility`], [`status`], [`replay`]. Transitions copy; a board is
//!   never mutated in place, so branches explored from a common
//!   ancestor cannot alias.
//! - **Solver**: [`best_move`], exhaustive minimax with alpha-beta
//!   pruning. Exact over the full 3x3 tree; pruning changes the node
//!   count, never the answer.
//!
//! There is no front-end here. Callers own rendering and input, thread
//! a [`Board`] through the rule functions, and ask [`best_move`] when
//! they want the optimal play.
//!
//! # Example
//!
//! ```
//! use solved_tictactoe::{best_move, place, status, Board, Status};
//!
//! // Optimal self-play from the empty board ends in a draw.
//! let mut board = Board::new();
//! while let Some(action) = best_move(&board) {
//!     board = place(&board, action)?;
//! }
//! assert_eq!(status(&board), Status::Draw);
//! # Ok::<(), solved_tictactoe::InvalidAction>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod rules;
mod search;
mod types;

pub use action::{Action, InvalidAction};
pub use rules::{
    is_terminal, legal_moves, place, replay, status, to_move, utility, winner,
};
pub use search::best_move;
pub use types::{Board, Cell, Marker, Status};
