//! Theme constants for the Caro GUI

use egui::Color32;

// Board colors - teal squares
pub const BOARD_BG: Color32 = Color32::from_rgb(28, 170, 156);
pub const GRID_LINE: Color32 = Color32::from_rgb(23, 145, 135);

// Mark colors
pub const CROSS_COLOR: Color32 = Color32::from_rgb(66, 66, 66);
pub const CIRCLE_COLOR: Color32 = Color32::from_rgb(239, 231, 200);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(250, 210, 60);
pub const HINT_MARKER: Color32 = Color32::from_rgb(120, 200, 255);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 70)
}

/// Translucent version of a mark color for previews
pub fn ghost(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 110)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// AI timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
/// Inset of a cross's strokes from the cell border, as a fraction of the cell
pub const CROSS_INSET_RATIO: f32 = 0.25;
pub const CIRCLE_RADIUS_RATIO: f32 = 1.0 / 3.0;
pub const MARK_WIDTH_RATIO: f32 = 0.1;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
