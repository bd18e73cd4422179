//! Core domain types for tic-tac-toe.

use crate::action::Action;
use serde::{Deserialize, Serialize};

/// A player's mark, also the two possible winners.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A cell on the board. Empty is a distinct third state, not a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell holding a player's marker.
    Marked(Marker),
}

/// 3x3 tic-tac-toe board.
///
/// A value type: transitions never mutate an existing board, they
/// produce a new one (see [`place`](crate::place)). A cell only ever
/// goes from `Empty` to `Marked`, never back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new all-empty board, the starting state of the game.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from explicit cell contents.
    ///
    /// Accepts any layout, including boards unreachable under
    /// alternating play. Rule functions do not validate reachability.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given coordinates, or `None` out of bounds.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells.get(action.row)?.get(action.col).copied()
    }

    /// Checks if the cell at the given coordinates is empty.
    ///
    /// Out-of-bounds coordinates are not empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Cell::Empty))
    }

    /// Returns all cells, row-major.
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Counts the cells holding the given marker.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Marked(marker))
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Writes a marker. Callers validate first; see `rules::place`.
    pub(crate) fn set(&mut self, action: Action, marker: Marker) {
        self.cells[action.row][action.col] = Cell::Marked(marker);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(marker) => write!(f, "{marker}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of a game, derived from board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Marker),
    /// Game ended with a full board and no winner.
    Draw,
}
