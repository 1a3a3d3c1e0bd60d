//! Game rules for the 6x6 four-in-a-row grid
//!
//! The only rule beyond occupancy is the win condition: 4 contiguous
//! same-mark cells along any of the four axes.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_run, is_winning_move};
