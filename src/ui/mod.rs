//! GUI module for the game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
pub use board_view::{BoardAction, BoardView};

use egui::Color32;

use crate::board::Player;
use crate::game::GameStatus;

fn player_color(player: Player) -> Color32 {
    match player {
        Player::X => theme::X_COLOR,
        Player::O => theme::O_COLOR,
    }
}

/// Text and colour of the status line for the given game status
pub fn status_line(status: GameStatus) -> (String, Color32) {
    match status {
        GameStatus::InProgress { to_move } => (format!("Turn: {to_move}"), player_color(to_move)),
        GameStatus::Won(winner) => (format!("Winner: {winner}!"), player_color(winner)),
        GameStatus::Draw => ("Draw!".to_string(), theme::TEXT_COLOR),
    }
}
