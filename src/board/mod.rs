//! Board representation for tic-tac-toe

pub mod grid;


// Re-exports
pub use grid::Board;

use thiserror::Error;

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
            Mark::Empty => write!(f, " "),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}

/// Rejected placement on the human input path.
///
/// The search engine never produces these: its probes only target cells
/// reported empty by `Board::available_moves`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    /// Coordinates outside the 3x3 grid
    #[error("position ({row}, {col}) is outside the board")]
    OutOfRange { row: u8, col: u8 },

    /// Target cell already holds a mark
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
}
