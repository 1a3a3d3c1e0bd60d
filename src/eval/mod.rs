//! Move selection heuristic for the automated opponent

pub mod heuristic;

// Re-exports
pub use heuristic::{axis_score, cell_weight, select_move, ScoreProfile, BLOCK_SCORE};
