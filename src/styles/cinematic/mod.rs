//! # Cinematic Style
//!
//! Slow cross-fades with a continuous zoom, framed by a vignette, warm color
//! grading, film grain and letterbox bars.

mod effect;

pub use effect::{grain_opacity, CinematicStyle};

// Cinematic layer names
pub const VIGNETTE: &str = "vignette";
pub const COLOR_GRADING: &str = "color_grading";
pub const FILM_GRAIN: &str = "film_grain";
pub const LETTERBOX_TOP: &str = "letterbox_top";
pub const LETTERBOX_BOTTOM: &str = "letterbox_bottom";

/// Height of each letterbox bar, in percent of frame height
pub const LETTERBOX_HEIGHT: f64 = 10.0;
