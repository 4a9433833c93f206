//! AI opponent integrating the search engine
//!
//! Binds the computer's mark for the lifetime of one game and wraps the
//! alpha-beta searcher with per-move statistics for the UI.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AiOpponent, Board, Mark, Pos};
//!
//! let mut board = Board::new();
//! board.set(Pos::new(1, 1), Mark::X);
//!
//! let mut opponent = AiOpponent::new(Mark::O);
//! if let Some(pos) = opponent.get_move(&board) {
//!     board.set(pos, Mark::O);
//! }
//! ```

use std::time::Instant;

use crate::board::{Board, Mark, Pos};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with statistics for display.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Backed-up score of the chosen move
    pub score: i32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        }
    }
}

/// Computer opponent for one game.
///
/// The mark assignment is fixed at construction; the searcher itself is
/// stateless between moves.
pub struct AiOpponent {
    mark: Mark,
    searcher: Searcher,
}

impl AiOpponent {
    /// Create an opponent playing `mark` at the default search depth.
    #[must_use]
    pub fn new(mark: Mark) -> Self {
        debug_assert!(mark != Mark::Empty);
        Self {
            mark,
            searcher: Searcher::new(),
        }
    }

    /// Create an opponent with a custom search depth.
    #[must_use]
    pub fn with_depth(mark: Mark, depth: u8) -> Self {
        debug_assert!(mark != Mark::Empty);
        Self {
            mark,
            searcher: Searcher::with_depth(depth),
        }
    }

    /// The mark this opponent plays.
    #[must_use]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Get the best move for the current position.
    ///
    /// Returns `None` when the position offers no move; callers should
    /// check `Board::available_moves` (or treat `None` as "nothing to
    /// play") rather than rely on an error path - there is none.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move along with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, self.mark);
        MoveResult::from_search(result, start.elapsed().as_millis() as u64)
    }
}
