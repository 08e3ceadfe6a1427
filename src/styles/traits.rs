use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CompositorError, Result, StyleError},
    scene::{Color, FrameSize, LayerContent, MediaItem, SceneLayer},
    styles::creative::MAX_PARTICLES,
    timing::TimingContext,
};

/// Core trait implemented by every transition style.
///
/// A style is built once per render session from its [`StyleParameters`] and is
/// then immutable: every method is a pure function of its arguments, so a
/// single instance can be shared across worker threads.
pub trait Style: Send + Sync {
    /// Returns the unique identifier of this style ("cinematic", ...)
    fn name(&self) -> &str {
        self.kind().as_str()
    }

    /// Returns a human-readable description of this style
    fn description(&self) -> &str;

    /// Which member of the closed style set this is
    fn kind(&self) -> StyleKind;

    /// Session parameters the style was built with
    fn parameters(&self) -> &StyleParameters;

    /// Produce the media layers of one frame.
    ///
    /// # Arguments
    ///
    /// * `timing` - Timing of the frame, including global frame and timeline length
    /// * `current` - Item owning the frame's slot
    /// * `next` - Item being transitioned into, or `None` outside a transition
    ///
    /// # Returns
    ///
    /// The current layer and, when `next` is given, the next layer, each carrying
    /// its z-order.
    fn render_frame(
        &self,
        timing: &TimingContext,
        current: &MediaItem,
        next: Option<&MediaItem>,
    ) -> Vec<SceneLayer>;

    /// Decorative layers drawn above the media, in the style's fixed order
    fn overlays(&self, timing: &TimingContext) -> Vec<SceneLayer>;

    /// Layer shown when there is no media to draw
    fn placeholder(&self) -> SceneLayer {
        SceneLayer::new(
            "placeholder",
            LayerContent::Placeholder {
                text: format!("{} Composition", self.kind().display_name()),
                font_size_px: 48.0,
                text_color: Color::WHITE,
                background: Color::BLACK,
            },
        )
    }

    /// Get style-specific metadata
    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            display_name: self.kind().display_name().to_string(),
            default_transition_frames: self.kind().default_transition_frames(),
            ..StyleMetadata::default()
        }
    }
}

/// The closed set of transition styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Cinematic,
    Modern,
    Creative,
}

impl StyleKind {
    pub const ALL: [StyleKind; 3] = [StyleKind::Cinematic, StyleKind::Modern, StyleKind::Creative];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cinematic => "cinematic",
            Self::Modern => "modern",
            Self::Creative => "creative",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Cinematic => "Cinematic",
            Self::Modern => "Modern",
            Self::Creative => "Creative",
        }
    }

    /// Transition length used unless configuration overrides it
    pub fn default_transition_frames(self) -> u32 {
        match self {
            Self::Cinematic => 45,
            Self::Modern => 30,
            Self::Creative => 60,
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKind {
    type Err = CompositorError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| StyleError::NotFound { name: s.to_string() }.into())
    }
}

/// Session-scoped parameters a style is built from.
///
/// Everything that looks random in the output (grain texture, particle layout)
/// is derived from `seed`, so identical parameters always render identical frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleParameters {
    pub kind: StyleKind,

    /// Length of the trailing transition window, in frames
    pub transition_frames: u32,

    /// Seed for procedural layouts
    pub seed: u64,

    /// Output frame size, used to convert pixel-sized decorations to percent
    pub canvas: FrameSize,

    /// Number of particles in the Creative particle field
    pub particle_count: usize,
}

pub const DEFAULT_SEED: u64 = 0x5EED;

impl StyleParameters {
    /// Parameters with the style's default transition length
    pub fn new(kind: StyleKind) -> Self {
        Self {
            kind,
            transition_frames: kind.default_transition_frames(),
            seed: DEFAULT_SEED,
            canvas: FrameSize::default(),
            particle_count: MAX_PARTICLES,
        }
    }

    pub fn with_transition_frames(mut self, frames: u32) -> Self {
        self.transition_frames = frames;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_canvas(mut self, canvas: FrameSize) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Validate that the parameters can be rendered
    pub fn validate(&self) -> Result<()> {
        if self.transition_frames == 0 {
            return Err(StyleError::InvalidConfig {
                details: format!("{} transition length must be positive", self.kind),
            }
            .into());
        }

        if self.particle_count > MAX_PARTICLES {
            return Err(StyleError::InvalidConfig {
                details: format!(
                    "particle count {} exceeds the maximum of {}",
                    self.particle_count, MAX_PARTICLES
                ),
            }
            .into());
        }

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(StyleError::InvalidConfig {
                details: format!("canvas {}x{} has no area", self.canvas.width, self.canvas.height),
            }
            .into());
        }

        Ok(())
    }
}

/// Metadata about a style's output
#[derive(Debug, Clone, Default)]
pub struct StyleMetadata {
    pub display_name: String,

    pub default_transition_frames: u32,

    /// Whether media layers are clipped by procedural masks
    pub uses_clip_masks: bool,

    /// Names of the decorative layers, in draw order
    pub overlay_layers: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style_kind() {
        assert_eq!("cinematic".parse::<StyleKind>().unwrap(), StyleKind::Cinematic);
        assert_eq!(" Modern ".parse::<StyleKind>().unwrap(), StyleKind::Modern);

        let err = "vaporwave".parse::<StyleKind>().unwrap_err();
        assert!(matches!(err, CompositorError::Style(StyleError::NotFound { ref name }) if name == "vaporwave"));
    }

    #[test]
    fn test_default_transition_lengths() {
        assert_eq!(StyleParameters::new(StyleKind::Cinematic).transition_frames, 45);
        assert_eq!(StyleParameters::new(StyleKind::Modern).transition_frames, 30);
        assert_eq!(StyleParameters::new(StyleKind::Creative).transition_frames, 60);
    }

    #[test]
    fn test_parameter_validation() {
        let params = StyleParameters::new(StyleKind::Creative);
        assert!(params.validate().is_ok());
        assert!(params.clone().with_transition_frames(0).validate().is_err());
        assert!(params.clone().with_particle_count(13).validate().is_err());
        assert!(params.with_canvas(FrameSize::new(0, 1080)).validate().is_err());
    }
}
