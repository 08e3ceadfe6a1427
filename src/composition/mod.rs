//! # Scene Assembly
//!
//! [`assemble_scene`] turns a media sequence, style parameters and a frame index
//! into the ordered layer list of that frame. [`CompositionEngine`] holds one
//! render session (validated inputs plus a built style) and renders single
//! frames or whole ranges in parallel.

pub mod assembler;
pub mod engine;

pub use assembler::{assemble_scene, OVERLAY_Z_BASE};
pub use engine::{CompositionEngine, RenderManifest, Scene};
