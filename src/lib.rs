//! Tic-tac-toe engine with an alpha-beta computer opponent
//!
//! A small game engine for human-versus-computer tic-tac-toe:
//! - 3x3 board with win detection scoped to the lines through the last move
//! - Depth-limited minimax with alpha-beta pruning (two plies by default)
//! - Static line evaluator with a 1/10/100 weight progression
//!
//! # Architecture
//!
//! - [`board`]: Board representation, move validation, win/draw queries
//! - [`eval`]: Static position evaluation over the eight winning lines
//! - [`search`]: Alpha-beta search
//! - [`engine`]: Computer opponent integrating the search
//! - [`ui`]: egui front end (symbol prompt, board, turn loop)
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AiOpponent, Board, Mark, Pos};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(0, 0), Mark::X).unwrap();
//!
//! // Computer responds as O
//! let mut opponent = AiOpponent::new(Mark::O);
//! if let Some(pos) = opponent.get_move(&board) {
//!     board.place(pos, Mark::O).unwrap();
//! }
//! assert!(!board.is_win(Mark::O));
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, InvalidMove, Mark, Pos, BOARD_SIZE};
pub use engine::{AiOpponent, MoveResult};
pub use search::{SearchResult, Searcher, DEFAULT_DEPTH};
