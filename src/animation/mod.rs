//! # Easing and Interpolation
//!
//! Named easing curves and a keyframe-style `interpolate` that maps a value
//! through one or more input segments onto output values.

mod easing;
mod interpolate;

pub use easing::{ease, Easing};
pub use interpolate::{interpolate, Extrapolate, InterpolateOptions};
