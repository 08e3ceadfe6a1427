//! # Creative Style
//!
//! Liquid clip-mask wipes between items, driven by a hue that cycles once over
//! the whole timeline and colors a rainbow gradient, a particle field, two
//! pulsing blobs and a tinted edge glow.

mod effect;
mod particles;

pub use effect::{hue_at, liquid_mask, morph_progress, CreativeStyle};
pub use particles::{Particle, ParticleField, MAX_PARTICLES, PULSE_CYCLE};

// Creative layer names
pub const RAINBOW: &str = "rainbow";
pub const PARTICLE: &str = "particle";
pub const BLOB_CIRCLE: &str = "blob_circle";
pub const BLOB_ELLIPSE: &str = "blob_ellipse";
pub const EDGE_GLOW: &str = "edge_glow";
pub const TEXTURE: &str = "texture";
