//! Game rules for the 5x5 four-in-a-row variant
//!
//! The only rule beyond "play on an empty cell" is the win condition:
//! four of your marks in a row, column or diagonal.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, WIN_LENGTH};
