use serde::{Deserialize, Serialize};

use super::{color::Color, media::MediaItem};

/// 2D transform applied around the center of a layer's region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation_degrees: f64,
    /// Horizontal offset in percent of the layer width
    pub translate_x_percent: f64,
    /// Vertical offset in percent of the layer height
    pub translate_y_percent: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale_x: 1.0,
        scale_y: 1.0,
        rotation_degrees: 0.0,
        translate_x_percent: 0.0,
        translate_y_percent: 0.0,
    };

    /// Uniform scale
    pub fn scale(factor: f64) -> Self {
        Self {
            scale_x: factor,
            scale_y: factor,
            ..Self::IDENTITY
        }
    }

    pub fn rotate(degrees: f64) -> Self {
        Self {
            rotation_degrees: degrees,
            ..Self::IDENTITY
        }
    }

    pub fn translate_x(percent: f64) -> Self {
        Self {
            translate_x_percent: percent,
            ..Self::IDENTITY
        }
    }

    pub fn with_scale(mut self, factor: f64) -> Self {
        self.scale_x = factor;
        self.scale_y = factor;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }
}

/// A point in percent of the layer's region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Procedural clip shape, in percent of the layer's region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ClipMask {
    /// Closed polygon, points in drawing order
    Polygon { points: Vec<Point> },
    /// Rectangle with per-corner radii (top-left, top-right, bottom-right,
    /// bottom-left); 50 on every corner is an ellipse
    RoundedRect { radii: [f64; 4] },
}

impl ClipMask {
    pub fn ellipse() -> Self {
        ClipMask::RoundedRect { radii: [50.0; 4] }
    }
}

/// How a layer combines with what is drawn below it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Overlay,
    SoftLight,
}

/// Placement of a layer, in percent of the output frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Region {
    fn default() -> Self {
        Self::FULL
    }
}

impl Region {
    pub const FULL: Region = Region {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Full-width band starting at the top edge
    pub const fn top_band(height: f64) -> Self {
        Self::new(0.0, 0.0, 100.0, height)
    }

    /// Full-width band ending at the bottom edge
    pub const fn bottom_band(height: f64) -> Self {
        Self::new(0.0, 100.0 - height, 100.0, height)
    }
}

/// One color stop; `offset` runs from 0 to 1 along the gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadialShape {
    Circle,
    Ellipse,
}

/// What a layer draws inside its region
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerContent {
    /// A media item, drawn to cover the region
    Media { item: MediaItem },
    /// Centered text on a solid background
    Placeholder {
        text: String,
        font_size_px: f64,
        text_color: Color,
        background: Color,
    },
    Fill { color: Color },
    /// Stroked rectangle border
    Outline { color: Color, stroke_px: f64 },
    /// CSS-style angle: 0 points up, 90 points right
    LinearGradient { angle_degrees: f64, stops: Vec<GradientStop> },
    RadialGradient { shape: RadialShape, stops: Vec<GradientStop> },
    /// Fractal noise texture; `seed` is fixed for the render session
    Noise { base_frequency: f64, octaves: u32, seed: u64 },
}

/// One drawable element of a rendered frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayer {
    /// Draw order; higher values are drawn later
    pub z_order: i32,

    /// Stable role name ("current", "next", "vignette", ...)
    pub name: &'static str,

    pub content: LayerContent,
    pub region: Region,

    /// Opacity in `[0, 1]`
    pub opacity: f64,

    pub transform: Transform,
    pub clip_mask: Option<ClipMask>,
    pub blend_mode: BlendMode,
    pub color_tint: Option<Color>,

    /// Gaussian blur radius in pixels, 0 for none
    pub blur_px: f64,
}

impl SceneLayer {
    /// Full-frame, fully opaque layer with no transform
    pub fn new(name: &'static str, content: LayerContent) -> Self {
        Self {
            z_order: 0,
            name,
            content,
            region: Region::FULL,
            opacity: 1.0,
            transform: Transform::IDENTITY,
            clip_mask: None,
            blend_mode: BlendMode::Normal,
            color_tint: None,
            blur_px: 0.0,
        }
    }

    pub fn media(name: &'static str, item: &MediaItem) -> Self {
        Self::new(name, LayerContent::Media { item: item.clone() })
    }

    pub fn at_z(mut self, z_order: i32) -> Self {
        self.z_order = z_order;
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Set opacity, clamped into `[0, 1]`
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_clip(mut self, clip_mask: Option<ClipMask>) -> Self {
        self.clip_mask = clip_mask;
        self
    }

    pub fn with_blend(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.color_tint = Some(tint);
        self
    }

    pub fn with_blur(mut self, blur_px: f64) -> Self {
        self.blur_px = blur_px;
        self
    }

    /// Media item drawn by this layer, if any
    pub fn source_item(&self) -> Option<&MediaItem> {
        match &self.content {
            LayerContent::Media { item } => Some(item),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, LayerContent::Placeholder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_is_clamped() {
        let layer = SceneLayer::new("fill", LayerContent::Fill { color: Color::BLACK });
        assert_eq!(layer.clone().with_opacity(1.5).opacity, 1.0);
        assert_eq!(layer.with_opacity(-0.2).opacity, 0.0);
    }

    #[test]
    fn test_source_item() {
        let item = MediaItem::image("a", "a.png");
        let layer = SceneLayer::media("current", &item);
        assert_eq!(layer.source_item(), Some(&item));
        assert!(!layer.is_placeholder());

        let overlay = SceneLayer::new("fill", LayerContent::Fill { color: Color::WHITE });
        assert!(overlay.source_item().is_none());
    }

    #[test]
    fn test_bands() {
        assert_eq!(Region::bottom_band(10.0), Region::new(0.0, 90.0, 100.0, 10.0));
        assert_eq!(Region::top_band(20.0).height, 20.0);
    }
}
