//! Quadline game engine
//!
//! A 6x6 four-in-a-row game against a greedy automated opponent:
//! - 6x6 board, 4-in-a-row to win
//! - X always moves first; either role can be the automated one
//! - Single-ply directional scoring heuristic (no lookahead, no fork
//!   detection), deterministic move selection
//!
//! # Architecture
//!
//! - [`board`]: grid, marks, positions and scan axes
//! - [`rules`]: win detection from a just-placed mark
//! - [`eval`]: the per-axis scoring heuristic and move selection
//! - [`session`]: the turn state machine driving a full game
//! - [`ui`]: egui front-end (glyphs, highlights, input gating)
//!
//! # Quick Start
//!
//! ```
//! use quadline::{GameSession, Mark, Pos, Status};
//!
//! // Human plays X and opens in the center
//! let mut session = GameSession::new(false);
//! session.apply_move(Pos::new(2, 2), Mark::X);
//!
//! // The automated reply has already been played
//! assert_eq!(session.board().mark_count(), 2);
//! assert_eq!(session.turn(), Mark::X);
//! assert_eq!(session.status(), Status::Playing);
//! ```

pub mod board;
pub mod eval;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Axis, Board, Mark, Pos, BOARD_SIZE, WIN_LENGTH};
pub use session::{GameSession, Outcome, Status};
