//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::TicTacToeApp;
pub use game_state::{GameSession, GameStatus};
