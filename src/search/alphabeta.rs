//! Minimax search with alpha-beta pruning
//!
//! The searcher explores the game tree to a fixed depth, scoring horizon
//! and terminal positions with the static evaluator. Each candidate move is
//! probed on a cheap copy of the board, so the caller's board is never left
//! in a speculative state.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark, Pos};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::new();
//! board.set(Pos::new(0, 0), Mark::X);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, Mark::O);
//! assert!(result.best_move.is_some());
//! ```

use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::eval::evaluate;

/// Default search depth in plies: the computer's move plus the opponent's
/// immediate reply. A design parameter, not a derived value.
pub const DEFAULT_DEPTH: u8 = 2;

/// Whose interest the current ply serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ply {
    /// The computer is choosing: raise alpha
    Maximizing,
    /// The opponent is choosing: lower beta
    Minimizing,
}

impl Ply {
    #[inline]
    fn flip(self) -> Ply {
        match self {
            Ply::Maximizing => Ply::Minimizing,
            Ply::Minimizing => Ply::Maximizing,
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when no legal move exists
    pub best_move: Option<Pos>,
    /// Backed-up score of the chosen move
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Depth-limited alpha-beta searcher.
///
/// Holds no position state across calls; each search is a fresh tree walk.
/// Ties between equally scored moves resolve to the first move in the
/// board's row-major enumeration order, which makes results deterministic.
pub struct Searcher {
    depth: u8,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with the default depth of two plies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create a searcher with a custom depth.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self { depth, nodes: 0 }
    }

    /// The configured search depth in plies.
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Search for the computer's best move.
    ///
    /// `computer` is the mark the search maximizes for. If the computer can
    /// force or already holds a win within the horizon it is preferred.
    /// Returns no move when the position offers none (game decided or board
    /// full) - callers should treat that as "nothing to play", not an error.
    #[must_use]
    pub fn search(&mut self, board: &Board, computer: Mark) -> SearchResult {
        self.nodes = 0;

        let (score, best_move) = self.alpha_beta(
            board,
            computer,
            computer,
            Ply::Maximizing,
            self.depth,
            i32::MIN,
            i32::MAX,
        );

        debug!(?best_move, score, nodes = self.nodes, "search complete");

        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Convenience wrapper returning only the chosen cell.
    #[must_use]
    pub fn best_move(&mut self, board: &Board, computer: Mark) -> Option<Pos> {
        self.search(board, computer).best_move
    }

    /// Recursive alpha-beta walk.
    ///
    /// Maximizing plies raise `alpha`, minimizing plies lower `beta`; both
    /// record the move that moved the bound. The scan stops early once
    /// `alpha >= beta`, and the running window is handed down unchanged to
    /// each child. The returned score is `alpha` on maximizing plies and
    /// `beta` on minimizing plies.
    fn alpha_beta(
        &mut self,
        board: &Board,
        computer: Mark,
        to_move: Mark,
        ply: Ply,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        // Already empty if either side has won
        let moves = board.available_moves();
        if moves.is_empty() || depth == 0 {
            return (evaluate(board, computer), None);
        }

        let mut best_move = None;

        for pos in moves {
            // Probe on a copy; the cell is empty by construction
            let mut probe = board.clone();
            probe.set(pos, to_move);

            let (score, _) = self.alpha_beta(
                &probe,
                computer,
                to_move.opponent(),
                ply.flip(),
                depth - 1,
                alpha,
                beta,
            );

            match ply {
                Ply::Maximizing if score > alpha => {
                    alpha = score;
                    best_move = Some(pos);
                }
                Ply::Minimizing if score < beta => {
                    beta = score;
                    best_move = Some(pos);
                }
                _ => {}
            }

            if alpha >= beta {
                break;
            }
        }

        match ply {
            Ply::Maximizing => (alpha, best_move),
            Ply::Minimizing => (beta, best_move),
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    /// Full-width minimax with the same strict-inequality tie-break,
    /// used as the pruning-free reference.
    fn minimax_plain(
        board: &Board,
        computer: Mark,
        to_move: Mark,
        ply: Ply,
        depth: u8,
    ) -> (i32, Option<Pos>) {
        let moves = board.available_moves();
        if moves.is_empty() || depth == 0 {
            return (evaluate(board, computer), None);
        }

        let mut best_score = match ply {
            Ply::Maximizing => i32::MIN,
            Ply::Minimizing => i32::MAX,
        };
        let mut best_move = None;

        for pos in moves {
            let mut probe = board.clone();
            probe.set(pos, to_move);
            let (score, _) =
                minimax_plain(&probe, computer, to_move.opponent(), ply.flip(), depth - 1);

            let better = match ply {
                Ply::Maximizing => score > best_score,
                Ply::Minimizing => score < best_score,
            };
            if better {
                best_score = score;
                best_move = Some(pos);
            }
        }

        (best_score, best_move)
    }

    /// Play `count` random legal moves (X first) with a seeded RNG.
    fn random_board(rng: &mut StdRng, count: usize) -> Board {
        let mut board = Board::new();
        let mut to_move = Mark::X;
        for _ in 0..count {
            let moves = board.available_moves();
            let Some(&pos) = moves.choose(rng) else {
                break; // decided or full
            };
            board.set(pos, to_move);
            to_move = to_move.opponent();
        }
        board
    }

    #[test]
    fn test_search_empty_board_in_bounds() {
        let mut searcher = Searcher::new();
        let board = Board::new();

        let result = searcher.search(&board, Mark::X);
        let pos = result.best_move.expect("empty board must yield a move");
        assert!((pos.row as usize) < BOARD_SIZE && (pos.col as usize) < BOARD_SIZE);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut searcher = Searcher::new();
        let mut board = Board::new();
        board.set(Pos::new(1, 1), Mark::X);

        let first = searcher.search(&board, Mark::O);
        let second = searcher.search(&board, Mark::O);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
    }

    #[test]
    fn test_search_blocks_immediate_threat() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Mark::X);
        board.set(Pos::new(0, 1), Mark::X);

        // O must take (0,2): any other move lets X complete the row at the
        // minimizing ply, which the evaluator scores far below a block.
        let mut searcher = Searcher::new();
        assert_eq!(searcher.best_move(&board, Mark::O), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_search_takes_win_over_block() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Mark::X);
        board.set(Pos::new(0, 1), Mark::X);
        board.set(Pos::new(1, 0), Mark::O);
        board.set(Pos::new(1, 1), Mark::O);

        // Both sides threaten a line; completing O's own row wins now
        let mut searcher = Searcher::new();
        assert_eq!(searcher.best_move(&board, Mark::O), Some(Pos::new(1, 2)));
    }

    #[test]
    fn test_search_decided_position_yields_no_move() {
        let mut board = Board::new();
        for col in 0..3 {
            board.set(Pos::new(0, col), Mark::X);
        }

        let mut searcher = Searcher::new();
        let result = searcher.search(&board, Mark::O);
        assert!(result.best_move.is_none());
        assert_eq!(result.score, evaluate(&board, Mark::O));
    }

    #[test]
    fn test_search_depth_zero_is_static_eval() {
        let mut board = Board::new();
        board.set(Pos::new(1, 1), Mark::X);

        let mut searcher = Searcher::with_depth(0);
        let result = searcher.search(&board, Mark::X);
        assert!(result.best_move.is_none());
        assert_eq!(result.score, evaluate(&board, Mark::X));
    }

    #[test]
    fn test_pruned_matches_full_width() {
        let mut rng = StdRng::seed_from_u64(0x7_1C7_AC70);

        for _ in 0..200 {
            let count = rng.gen_range(0..=7);
            let board = random_board(&mut rng, count);
            let computer = if rng.gen_bool(0.5) { Mark::X } else { Mark::O };

            for depth in [2u8, 3] {
                let mut searcher = Searcher::with_depth(depth);
                let pruned = searcher.search(&board, computer);
                let (score, best_move) = minimax_plain(
                    &board,
                    computer,
                    computer,
                    Ply::Maximizing,
                    depth,
                );

                assert_eq!(
                    pruned.score, score,
                    "score diverged at depth {depth}: {board:?}"
                );
                assert_eq!(
                    pruned.best_move, best_move,
                    "move diverged at depth {depth}: {board:?}"
                );
            }
        }
    }
}
