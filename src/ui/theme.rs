//! Theme constants for the quadline GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const CELL_BG: Color32 = Color32::from_rgb(45, 48, 53);
pub const CELL_HOVER: Color32 = Color32::from_rgb(60, 64, 70);

// Mark glyph colors
pub const X_GLYPH: Color32 = Color32::from_rgb(90, 170, 255);
pub const O_GLYPH: Color32 = Color32::from_rgb(255, 160, 80);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 200, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(200, 50, 50);

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(140, 145, 155);
pub const BANNER_WIN: Color32 = Color32::from_rgb(80, 220, 120);
pub const BANNER_LOSS: Color32 = Color32::from_rgb(255, 90, 90);
pub const BANNER_DRAW: Color32 = Color32::from_rgb(220, 200, 90);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 4.0;
pub const GLYPH_SIZE_RATIO: f32 = 0.6;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
