//! Evaluation module for tic-tac-toe positions
//!
//! Provides the static heuristic the search scores cutoff positions with:
//! a per-line tally over the eight winning lines, weighted 1/10/100.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, LINES};
pub use patterns::{line_score, LineScore};
