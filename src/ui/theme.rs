//! Theme constants for the GUI

use egui::Color32;

// Background and grid
pub const BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);
pub const LINE_COLOR: Color32 = Color32::from_rgb(70, 70, 70);
pub const TEXT_COLOR: Color32 = Color32::from_rgb(40, 40, 40);

// Marks
pub const X_COLOR: Color32 = Color32::from_rgb(255, 50, 50);
pub const O_COLOR: Color32 = Color32::from_rgb(50, 50, 255);

// Highlights
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(220, 255, 220);
pub const LAST_MOVE_HIGHLIGHT: Color32 = Color32::from_rgb(255, 255, 150);

// Restart button
pub const BUTTON_COLOR: Color32 = Color32::from_rgb(220, 220, 220);
pub const BUTTON_HOVER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

// Sizes
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const MARK_STROKE_WIDTH: f32 = 6.0;
/// Half-extent of an X arm and radius of an O, relative to the cell
pub const MARK_SIZE_RATIO: f32 = 0.35;
pub const WIN_HIGHLIGHT_INSET: f32 = 2.0;
pub const LAST_MOVE_INSET: f32 = 5.0;
pub const STATUS_Y: f32 = 30.0;
pub const STATUS_FONT_SIZE: f32 = 28.0;
pub const BUTTON_FONT_SIZE: f32 = 22.0;
pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Distance from the bottom edge of the window to the top of the button
pub const BUTTON_BOTTOM_OFFSET: f32 = 45.0;
