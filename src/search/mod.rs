//! Search module for the tic-tac-toe AI
//!
//! Contains the depth-limited minimax search with alpha-beta pruning.

pub mod alphabeta;

pub use alphabeta::{Ply, SearchResult, Searcher, DEFAULT_DEPTH};
