//! Turn and outcome tracking for a single game

mod state;

pub use state::GameState;

use crate::board::Player;

/// Where the game stands, as shown in the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { to_move: Player },
    Won(Player),
    Draw,
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on with the other player to move
    Continue,
    /// The mover completed a line
    Win(Player),
    /// Board filled up without a line
    Draw,
}

impl MoveOutcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}
