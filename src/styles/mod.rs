//! # Transition Styles
//!
//! Each style turns a frame's timing into media layers plus a fixed stack of
//! decorative overlays. The set is closed and dispatched by [`StyleKind`].
//!
//! ## Built-in Styles
//!
//! - **Cinematic**: cross-fade, slow zoom, vignette, color grading, film grain, letterbox
//! - **Modern**: horizontal slide, scale pulse, rotating geometry, grid lines, edge gradients
//! - **Creative**: liquid clip-mask wipe, hue-cycling gradient, particles, liquid blobs
//!
//! ## Usage
//!
//! ```rust
//! use reel_compositor::styles::StyleRegistry;
//!
//! let registry = StyleRegistry::new();
//! let modern = registry.get_style("modern").unwrap();
//! assert_eq!(modern.parameters().transition_frames, 30);
//! ```

pub mod registry;
pub mod traits;

pub mod cinematic;
pub mod creative;
pub mod modern;

pub use registry::{build_style, StyleRegistry};
pub use traits::{Style, StyleKind, StyleMetadata, StyleParameters, DEFAULT_SEED};

pub use cinematic::CinematicStyle;
pub use creative::CreativeStyle;
pub use modern::ModernStyle;

/// Name and draw order of the layer showing the slot's own item
pub const CURRENT_LAYER: &str = "current";
pub const CURRENT_Z: i32 = 0;

/// Name and draw order of the layer showing the incoming item
pub const NEXT_LAYER: &str = "next";
pub const NEXT_Z: i32 = 1;
