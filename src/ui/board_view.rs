//! Board rendering and pointer mapping for the GUI

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::board::{Player, Pos, BOARD_SIZE};
use crate::config::{LayoutConfig, FOOTER_HEIGHT};
use crate::game::GameState;

use super::theme::*;

/// What a click on the board area asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    Restart,
    /// Raw cell coordinates; the game decides whether they are playable
    Move { row: i32, col: i32 },
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    layout: LayoutConfig,
    /// Top-left corner of the drawing area
    origin: Pos2,
}

impl BoardView {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            origin: Pos2::ZERO,
        }
    }

    /// Render the board and return the action for a click, if any
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState) -> Option<BoardAction> {
        let size = Vec2::new(self.layout.window_width(), self.layout.window_height());
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.origin = response.rect.min;

        painter.rect_filled(response.rect, CornerRadius::ZERO, BG_COLOR);

        self.draw_status(&painter, state);
        self.draw_highlights(&painter, state);
        self.draw_grid(&painter);
        self.draw_marks(&painter, state);

        let hovered = response
            .hover_pos()
            .is_some_and(|p| self.is_restart_hit(p));
        self.draw_restart_button(&painter, hovered);

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|p| self.action_at(p));
        }
        None
    }

    /// Map a click position to an action. The restart button wins over the grid.
    pub fn action_at(&self, screen_pos: Pos2) -> Option<BoardAction> {
        if self.is_restart_hit(screen_pos) {
            return Some(BoardAction::Restart);
        }
        self.screen_to_cell(screen_pos)
            .map(|(row, col)| BoardAction::Move { row, col })
    }

    /// Convert screen coordinates to raw cell coordinates.
    ///
    /// The grid bounds are inclusive on every side, so a click exactly on the
    /// right or bottom border yields index `BOARD_SIZE`. Callers pass that on
    /// and let the game reject it.
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<(i32, i32)> {
        let rel = screen_pos - self.origin;
        let margin = self.layout.margin;
        let right = self.layout.window_width() - margin;
        let bottom = self.layout.window_height() - margin - FOOTER_HEIGHT;

        if rel.x < margin || rel.x > right || rel.y < margin || rel.y > bottom {
            return None;
        }

        let col = ((rel.x - margin) / self.layout.cell_size).floor() as i32;
        let row = ((rel.y - margin) / self.layout.cell_size).floor() as i32;
        Some((row, col))
    }

    /// Screen rectangle covered by a cell
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let cell = self.layout.cell_size;
        let min = self.origin
            + Vec2::new(
                self.layout.margin + pos.col as f32 * cell,
                self.layout.margin + pos.row as f32 * cell,
            );
        Rect::from_min_size(min, Vec2::splat(cell))
    }

    pub fn restart_button_rect(&self) -> Rect {
        let min = self.origin
            + Vec2::new(
                self.layout.window_width() / 2.0 - BUTTON_WIDTH / 2.0,
                self.layout.window_height() - BUTTON_BOTTOM_OFFSET,
            );
        Rect::from_min_size(min, Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT))
    }

    fn is_restart_hit(&self, screen_pos: Pos2) -> bool {
        self.restart_button_rect().contains(screen_pos)
    }

    /// Draw the turn/result line above the grid
    fn draw_status(&self, painter: &Painter, state: &GameState) {
        let (text, color) = super::status_line(state.status());
        let center = self.origin + Vec2::new(self.layout.window_width() / 2.0, STATUS_Y);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(STATUS_FONT_SIZE),
            color,
        );
    }

    /// Winning line and last move backgrounds, painted under the marks
    fn draw_highlights(&self, painter: &Painter, state: &GameState) {
        for &pos in state.winning_cells() {
            let rect = self.cell_rect(pos).shrink(WIN_HIGHLIGHT_INSET);
            painter.rect_filled(rect, CornerRadius::same(5), WIN_HIGHLIGHT);
        }

        if let Some(pos) = state.last_move() {
            let rect = self.cell_rect(pos).shrink(LAST_MOVE_INSET);
            painter.rect_filled(rect, CornerRadius::same(3), LAST_MOVE_HIGHLIGHT);
        }
    }

    /// Draw the BOARD_SIZE x BOARD_SIZE grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, LINE_COLOR);
        let margin = self.layout.margin;
        let extent = BOARD_SIZE as f32 * self.layout.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = margin + i as f32 * self.layout.cell_size;

            // Horizontal line
            let start = self.origin + Vec2::new(margin, offset);
            let end = self.origin + Vec2::new(margin + extent, offset);
            painter.line_segment([start, end], stroke);

            // Vertical line
            let start = self.origin + Vec2::new(offset, margin);
            let end = self.origin + Vec2::new(offset, margin + extent);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, state: &GameState) {
        for (pos, cell) in state.board().iter() {
            let Some(player) = cell.player() else {
                continue;
            };
            let center = self.cell_rect(pos).center();
            match player {
                Player::X => self.draw_x(painter, center),
                Player::O => self.draw_o(painter, center),
            }
        }
    }

    fn draw_x(&self, painter: &Painter, center: Pos2) {
        let arm = self.layout.cell_size * MARK_SIZE_RATIO;
        let stroke = Stroke::new(MARK_STROKE_WIDTH, X_COLOR);
        painter.line_segment(
            [center + Vec2::new(-arm, -arm), center + Vec2::new(arm, arm)],
            stroke,
        );
        painter.line_segment(
            [center + Vec2::new(arm, -arm), center + Vec2::new(-arm, arm)],
            stroke,
        );
    }

    fn draw_o(&self, painter: &Painter, center: Pos2) {
        let radius = self.layout.cell_size * MARK_SIZE_RATIO;
        painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE_WIDTH, O_COLOR));
    }

    fn draw_restart_button(&self, painter: &Painter, hovered: bool) {
        let rect = self.restart_button_rect();
        let fill = if hovered { BUTTON_HOVER_COLOR } else { BUTTON_COLOR };

        painter.rect_filled(rect, CornerRadius::same(5), fill);
        painter.rect_stroke(
            rect,
            CornerRadius::same(5),
            Stroke::new(2.0, LINE_COLOR),
            StrokeKind::Inside,
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "New game",
            FontId::proportional(BUTTON_FONT_SIZE),
            TEXT_COLOR,
        );
    }
}
