//! # Scene Description
//!
//! The engine's output vocabulary. A frame is an ordered list of [`SceneLayer`]s
//! that an external host rasterizes: media drawn with a transform, opacity and
//! optional clip mask, followed by decorative overlays. All coordinates are
//! percentages of the output frame.

pub mod color;
pub mod layer;
pub mod media;

pub use color::Color;
pub use layer::{
    BlendMode, ClipMask, GradientStop, LayerContent, Point, RadialShape, Region, SceneLayer,
    Transform,
};
pub use media::{FrameSize, MediaItem, MediaKind};
