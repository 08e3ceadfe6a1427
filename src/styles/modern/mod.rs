//! # Modern Style
//!
//! Horizontal slide transitions over a gently scaling image, with rotating
//! geometry, grid lines and darkened edges.

mod effect;

pub use effect::{shape_rotation, slide_offsets, ModernStyle};

// Modern layer names
pub const COLOR_OVERLAY: &str = "color_overlay";
pub const OUTLINE_SQUARE: &str = "outline_square";
pub const FILLED_SQUARE: &str = "filled_square";
pub const GRID_LINE_LEFT: &str = "grid_line_left";
pub const GRID_LINE_RIGHT: &str = "grid_line_right";
pub const EDGE_TOP: &str = "edge_top";
pub const EDGE_BOTTOM: &str = "edge_bottom";
