//! Main application for the GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, Frame};
use tracing::{debug, info};

use super::board_view::{BoardAction, BoardView};
use crate::config::AppConfig;
use crate::game::GameState;

/// Main application: sole owner of the game and the board view
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    frame_interval: Duration,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: AppConfig) -> Self {
        let frame_rate = config.window.frame_rate.max(1);
        Self {
            state: GameState::new(),
            board_view: BoardView::new(config.layout),
            frame_interval: Duration::from_secs_f64(1.0 / frame_rate as f64),
        }
    }

    /// Apply a click from the board view
    fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::Restart => self.state.reset(),
            BoardAction::Move { row, col } => match self.state.try_move(row, col) {
                Ok(outcome) if outcome.is_terminal() => {
                    info!(?outcome, "game finished, click New game or press N to play again");
                }
                Ok(_) => {}
                // Illegal clicks have no visible effect
                Err(err) => debug!(row, col, %err, "click ignored"),
            },
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, quit) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Escape),
            )
        });

        // N - New game
        if new_game {
            self.apply(BoardAction::Restart);
        }

        // Escape - Quit
        if quit {
            info!("closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Render the board and feed back any click
    fn render_board(&mut self, ctx: &Context) {
        let action = CentralPanel::default()
            .frame(Frame::new().fill(super::theme::BG_COLOR))
            .show(ctx, |ui| self.board_view.show(ui, &self.state))
            .inner;

        if let Some(action) = action {
            self.apply(action);
            ctx.request_repaint();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render_board(ctx);

        // Keep a steady tick for hover feedback on the restart button
        ctx.request_repaint_after(self.frame_interval);
    }
}
