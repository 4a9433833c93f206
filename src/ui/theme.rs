//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(25, 25, 30);
pub const O_MARK: Color32 = Color32::from_rgb(250, 250, 252);
pub const O_MARK_SHADOW: Color32 = Color32::from_rgb(150, 150, 155);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WAIT: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_LOST: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const MARK_RADIUS_RATIO: f32 = 0.32;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_STROKE_WIDTH: f32 = 7.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
