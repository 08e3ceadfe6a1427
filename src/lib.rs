//! # Reel-Compositor
//!
//! Frame-driven transition and compositing engine for styled media slideshows.
//!
//! Given an ordered sequence of images and videos, a timeline length and a
//! style, the engine describes every frame as a stack of [`SceneLayer`]s:
//! which media is on screen, how it is transformed, faded or masked, and which
//! decorative overlays sit on top. Rasterizing and encoding the layers is left
//! to the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use reel_compositor::{
//!     composition::CompositionEngine,
//!     config::Config,
//!     scene::MediaItem,
//! };
//!
//! # fn main() -> reel_compositor::Result<()> {
//! let media = vec![
//!     MediaItem::image("beach", "uploads/beach.jpg"),
//!     MediaItem::video("surf", "uploads/surf.mp4"),
//! ];
//!
//! let engine = CompositionEngine::new(Config::default(), "cinematic", media)?;
//! let scene = engine.scene_at(140)?;
//! assert!(!scene.layers.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`timing`] - Slot and transition-window arithmetic
//! - [`animation`] - Easing curves and keyframe interpolation
//! - [`scene`] - Media items and the layer description handed to the host
//! - [`styles`] - Cinematic, Modern and Creative transition styles
//! - [`composition`] - Per-frame scene assembly and parallel batch rendering
//! - [`config`] - Configuration management

pub mod animation;
pub mod composition;
pub mod config;
pub mod error;
pub mod scene;
pub mod styles;
pub mod timing;

// Re-export commonly used types for convenience
pub use crate::{
    animation::{ease, interpolate, Easing},
    composition::{assemble_scene, CompositionEngine},
    config::Config,
    error::{CompositorError, Result},
    scene::{MediaItem, SceneLayer},
    styles::{Style, StyleKind, StyleParameters, StyleRegistry},
    timing::{compute_timing, TimingContext},
};
