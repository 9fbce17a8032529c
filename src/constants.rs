//! Shared application-wide constants.
//! Centralizes tweakable values used across block rendering and board interactions.

use egui::Color32;

// Block dimensions
/// Default block width in model units.
pub const BLOCK_WIDTH: f32 = 180.0;
/// Default block height in model units. Circles use this for both dimensions.
pub const BLOCK_HEIGHT: f32 = 70.0;
/// Corner radius for rectangle and text box outlines.
pub const BLOCK_CORNER_RADIUS: f32 = 10.0;
/// Outline width for rectangles and circles.
pub const BLOCK_STROKE_WIDTH: f32 = 1.0;
/// Outline width for text boxes.
pub const TEXT_BOX_STROKE_WIDTH: f32 = 0.5;
/// Maximum number of characters a block label may hold.
pub const MAX_TEXT_LEN: usize = 30;
/// Font size used for block labels (model units).
pub const BLOCK_FONT_SIZE: f32 = 18.0;
/// Label of a freshly created rectangle or circle.
pub const DEFAULT_BLOCK_TEXT: &str = "Block";
/// Label of a freshly created text box.
pub const DEFAULT_TEXT_BOX_TEXT: &str = "type here";

// Handles and edges
/// Radius of the connection point handles drawn on hovered/selected blocks.
pub const HANDLE_RADIUS: f32 = 5.0;
/// Radius of the arrowhead marker drawn at an edge's destination.
pub const ARROWHEAD_RADIUS: f32 = 6.0;
/// Stroke width of edge curves.
pub const EDGE_STROKE_WIDTH: f32 = 1.0;

// Colors
/// Canvas background.
pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(0x13, 0x13, 0x13);
/// Accent used for selected outlines, selected labels and arrowheads.
pub const ACCENT_COLOR: Color32 = Color32::from_rgb(0xE0, 0x21, 0x8A);
/// Lighter accent used for hovered outlines and edge curves.
pub const HOVER_COLOR: Color32 = Color32::from_rgb(0xFF, 0xC0, 0xCB);
/// Default outline, label, handle and grid color.
pub const FOREGROUND_COLOR: Color32 = Color32::WHITE;

// Grid
/// Number of grid cells between thicker grid lines.
pub const GRID_MAJOR_EVERY: usize = 5;
/// Line width of minor grid lines.
pub const GRID_MINOR_WIDTH: f32 = 0.1;
/// Line width of major grid lines.
pub const GRID_MAJOR_WIDTH: f32 = 0.2;
