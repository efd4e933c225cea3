//! Four-in-a-row on a 5x5 board
//!
//! A two-player hot-seat variant of tic-tac-toe:
//! - 5x5 board, X moves first
//! - Four marks in a row (horizontal, vertical or diagonal) win
//! - A full board without such a line is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board, cell and position types
//! - [`rules`]: Win detection from the last placed mark
//! - [`game`]: [`GameState`], the single owner of a running game
//! - [`ui`]: egui/eframe front end mapping clicks to moves
//! - [`config`]: TOML window and layout settings
//! - [`error`]: Error types
//!
//! # Quick Start
//!
//! ```
//! use four_in_a_row::{GameState, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (4, 4), (0, 1), (4, 3), (0, 2), (4, 2), (0, 3)] {
//!     game.make_move(row, col);
//! }
//!
//! assert!(game.is_game_over());
//! assert_eq!(game.winner(), Some(Player::X));
//! assert_eq!(game.winning_cells().len(), 4);
//!
//! // Occupied or off-board cells are refused without changing anything
//! game.reset();
//! assert!(game.make_move(2, 2));
//! assert!(!game.make_move(2, 2));
//! assert!(!game.make_move(7, -1));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::AppConfig;
pub use error::{AppError, ConfigError, MoveError};
pub use game::{GameState, GameStatus, MoveOutcome};
pub use rules::WIN_LENGTH;
