//! Board grid with last-move tracking
//!
//! Win detection is scoped to the lines passing through the most recently
//! placed mark. A line completed elsewhere is not reported; the turn loop
//! checks after every placement, so during legal play every win is seen on
//! the move that makes it.

use super::{InvalidMove, Mark, Pos, BOARD_SIZE};

/// Game board: a 3x3 grid of cells plus the last-move marker
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    last_move: Option<Pos>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            last_move: None,
        }
    }

    /// Get the mark at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// The most recently placed mark's position, if any
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Place a mark (without validation) and record it as the last move.
    /// Use `place` for game moves.
    #[inline]
    pub fn set(&mut self, pos: Pos, mark: Mark) {
        self.cells[pos.row as usize][pos.col as usize] = mark;
        self.last_move = Some(pos);
    }

    /// Validated placement for the game loop.
    ///
    /// Fails with [`InvalidMove`] if the coordinates are out of range or the
    /// cell is occupied; the board is untouched on error.
    pub fn place(&mut self, pos: Pos, mark: Mark) -> Result<(), InvalidMove> {
        if !Pos::is_valid(i32::from(pos.row), i32::from(pos.col)) {
            return Err(InvalidMove::OutOfRange {
                row: pos.row,
                col: pos.col,
            });
        }
        if !self.is_empty(pos) {
            return Err(InvalidMove::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.set(pos, mark);
        Ok(())
    }

    /// Reset a cell to empty without touching the last-move marker.
    ///
    /// Undo for a speculative probe: a caller that mutates the board in
    /// place must clear the probed cell before any further win checks.
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.row as usize][pos.col as usize] = Mark::Empty;
    }

    /// Check whether `mark` has a full line through the last-placed cell.
    ///
    /// Only the row, column, and (when the last move sits on one) the
    /// diagonals through the last move are examined.
    pub fn is_win(&self, mark: Mark) -> bool {
        let Some(last) = self.last_move else {
            return false;
        };
        let (r, c) = (last.row as usize, last.col as usize);

        let row = (0..BOARD_SIZE).all(|i| self.cells[r][i] == mark);
        let col = (0..BOARD_SIZE).all(|i| self.cells[i][c] == mark);
        let main_diag = r == c && (0..BOARD_SIZE).all(|i| self.cells[i][i] == mark);
        let anti_diag = r + c == BOARD_SIZE - 1
            && (0..BOARD_SIZE).all(|i| self.cells[i][BOARD_SIZE - 1 - i] == mark);

        row || col || main_diag || anti_diag
    }

    /// Check whether every cell is occupied
    pub fn is_draw(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// All empty cells in row-major order, or nothing if the game is
    /// already decided for either mark.
    pub fn available_moves(&self) -> Vec<Pos> {
        if self.is_win(Mark::X) || self.is_win(Mark::O) {
            return Vec::new();
        }

        let mut moves = Vec::with_capacity(super::TOTAL_CELLS);
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                if self.is_empty(pos) {
                    moves.push(pos);
                }
            }
        }
        moves
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
