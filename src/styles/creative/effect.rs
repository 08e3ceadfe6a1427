use std::f64::consts::PI;

use crate::{
    animation::{interpolate, Easing, InterpolateOptions},
    scene::{
        BlendMode, ClipMask, Color, GradientStop, LayerContent, MediaItem, Point, RadialShape,
        Region, SceneLayer, Transform,
    },
    styles::{Style, StyleKind, StyleMetadata, StyleParameters, CURRENT_LAYER, CURRENT_Z, NEXT_LAYER, NEXT_Z},
    timing::TimingContext,
};

use super::{particles::ParticleField, BLOB_CIRCLE, BLOB_ELLIPSE, EDGE_GLOW, PARTICLE, RAINBOW, TEXTURE};

/// Salt mixed into the session seed for the texture overlay's noise
const TEXTURE_SEED_SALT: u64 = 0x7E47_u64;

/// Creative transition style
pub struct CreativeStyle {
    params: StyleParameters,
    particles: ParticleField,
}

impl CreativeStyle {
    /// Build the style; the particle field is laid out here, once per session
    pub fn new(params: StyleParameters) -> Self {
        let particles = ParticleField::generate(params.seed, params.particle_count);
        Self { params, particles }
    }

    pub fn particle_field(&self) -> &ParticleField {
        &self.particles
    }

    fn rainbow(&self, hue: f64) -> SceneLayer {
        let stops = (0..5)
            .map(|i| GradientStop::new(i as f64 * 0.25, Color::hsl(hue + i as f64 * 60.0, 70.0, 50.0)))
            .collect();

        SceneLayer::new(
            RAINBOW,
            LayerContent::LinearGradient {
                angle_degrees: 45.0,
                stops,
            },
        )
        .with_opacity(0.3)
        .with_blend(BlendMode::Overlay)
    }

    /// 200px glowing circle at top 20% / left 10%
    fn blob_circle(&self, frame: u32, hue: f64) -> SceneLayer {
        let canvas = self.params.canvas;
        let pulse = interpolate(
            (frame % 60) as f64,
            [0.0, 30.0, 60.0],
            [0.5, 1.2, 0.5],
            InterpolateOptions::clamped(Easing::SinInOut),
        );

        SceneLayer::new(
            BLOB_CIRCLE,
            LayerContent::RadialGradient {
                shape: RadialShape::Circle,
                stops: vec![
                    GradientStop::new(0.0, Color::hsl(hue, 80.0, 60.0)),
                    GradientStop::new(0.7, Color::TRANSPARENT),
                ],
            },
        )
        .with_region(Region::new(10.0, 20.0, canvas.px_to_pct_x(200.0), canvas.px_to_pct_y(200.0)))
        .with_clip(Some(ClipMask::ellipse()))
        .with_transform(Transform::scale(pulse))
        .with_opacity(0.4)
        .with_blur(20.0)
    }

    /// 150px lopsided ellipse at bottom 15% / right 15%, half a cycle behind
    fn blob_ellipse(&self, frame: u32, hue: f64) -> SceneLayer {
        let canvas = self.params.canvas;
        let width = canvas.px_to_pct_x(150.0);
        let height = canvas.px_to_pct_y(150.0);
        let pulse = interpolate(
            ((frame + 30) % 60) as f64,
            [0.0, 30.0, 60.0],
            [0.8, 1.5, 0.8],
            InterpolateOptions::clamped(Easing::SinInOut),
        );

        SceneLayer::new(
            BLOB_ELLIPSE,
            LayerContent::RadialGradient {
                shape: RadialShape::Ellipse,
                stops: vec![
                    GradientStop::new(0.0, Color::hsl(hue + 120.0, 80.0, 60.0)),
                    GradientStop::new(0.7, Color::TRANSPARENT),
                ],
            },
        )
        .with_region(Region::new(85.0 - width, 85.0 - height, width, height))
        .with_clip(Some(ClipMask::RoundedRect {
            radii: [30.0, 70.0, 20.0, 80.0],
        }))
        .with_transform(Transform::rotate(hue).with_scale(pulse))
        .with_opacity(0.3)
        .with_blur(15.0)
    }

    fn edge_glow(&self, hue: f64) -> SceneLayer {
        let tint = Color::hsl(hue, 50.0, 30.0);
        SceneLayer::new(
            EDGE_GLOW,
            LayerContent::RadialGradient {
                shape: RadialShape::Circle,
                stops: vec![
                    GradientStop::new(0.2, Color::TRANSPARENT),
                    GradientStop::new(1.0, tint),
                ],
            },
        )
        .with_opacity(0.6)
        .with_tint(tint)
    }

    fn texture(&self) -> SceneLayer {
        SceneLayer::new(
            TEXTURE,
            LayerContent::Noise {
                base_frequency: 0.3,
                octaves: 2,
                seed: self.params.seed ^ TEXTURE_SEED_SALT,
            },
        )
        .with_opacity(0.2)
        .with_blend(BlendMode::SoftLight)
    }
}

/// Global hue in degrees at a frame.
///
/// Cycles once over the whole timeline through five control points, reaching
/// exactly 360 at `frame == total_frames`.
pub fn hue_at(frame: u32, total_frames: u32) -> f64 {
    let d = total_frames as f64;
    interpolate(
        frame as f64,
        [0.0, d / 4.0, d / 2.0, d * 3.0 / 4.0, d],
        [0.0, 60.0, 120.0, 240.0, 360.0],
        InterpolateOptions::clamped(Easing::SinInOut),
    )
}

/// Eased progress through the transition window, 0 before it and 1 at its end
pub fn morph_progress(timing: &TimingContext) -> f64 {
    interpolate(
        timing.local(),
        timing.transition_window(),
        [0.0, 1.0],
        InterpolateOptions::clamped(Easing::CubicInOut),
    )
}

/// Liquid wipe polygon for a progress value.
///
/// The top and bottom edges advance with `progress * 100%`, each bent by its
/// own wave, so the boundary between the layers ripples as it travels.
pub fn liquid_mask(progress: f64) -> ClipMask {
    let top_wave = (progress * PI * 4.0).sin() * 10.0;
    let bottom_wave = (progress * PI * 6.0).cos() * 15.0;
    let base = progress * 100.0;

    ClipMask::Polygon {
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(base + top_wave, 0.0),
            Point::new(base + bottom_wave, 100.0),
            Point::new(0.0, 100.0),
        ],
    }
}

impl Style for CreativeStyle {
    fn description(&self) -> &str {
        "Artistic transitions with liquid morphing, particle effects, and vibrant colors"
    }

    fn kind(&self) -> StyleKind {
        StyleKind::Creative
    }

    fn parameters(&self) -> &StyleParameters {
        &self.params
    }

    fn render_frame(
        &self,
        timing: &TimingContext,
        current: &MediaItem,
        next: Option<&MediaItem>,
    ) -> Vec<SceneLayer> {
        let local = timing.local();
        let slot = timing.slot_length as f64;

        let scale = interpolate(
            local,
            [0.0, 30.0, slot - 30.0, slot],
            [1.1, 1.0, 1.0, 0.9],
            InterpolateOptions::clamped(Easing::QuadInOut),
        );
        let rotation = interpolate(
            local,
            timing.slot_window(),
            [0.0, 5.0],
            InterpolateOptions::clamped(Easing::QuadOut),
        );
        let current_layer = SceneLayer::media(CURRENT_LAYER, current)
            .at_z(CURRENT_Z)
            .with_transform(Transform::scale(scale).with_rotation(rotation));

        let Some(next) = next else {
            return vec![current_layer];
        };

        let progress = morph_progress(timing);
        vec![
            current_layer.with_clip(Some(liquid_mask(1.0 - progress))),
            SceneLayer::media(NEXT_LAYER, next)
                .at_z(NEXT_Z)
                .with_clip(Some(liquid_mask(progress))),
        ]
    }

    fn overlays(&self, timing: &TimingContext) -> Vec<SceneLayer> {
        let frame = timing.frame_index;
        let hue = hue_at(frame, timing.total_frames);
        let slot = timing.slot_length as f64;

        // The whole field fades in and out at the edges of every slot
        let particle_fade = interpolate(
            timing.local(),
            [0.0, 15.0, slot - 15.0, slot],
            [0.0, 1.0, 1.0, 0.0],
            InterpolateOptions::clamped(Easing::QuadInOut),
        );

        let mut layers = Vec::with_capacity(self.particles.len() + 5);
        layers.push(self.rainbow(hue));
        layers.extend(self.particles.layers(frame, hue, particle_fade, self.params.canvas));
        layers.push(self.blob_circle(frame, hue));
        layers.push(self.blob_ellipse(frame, hue));
        layers.push(self.edge_glow(hue));
        layers.push(self.texture());
        layers
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            display_name: "Creative".to_string(),
            default_transition_frames: StyleKind::Creative.default_transition_frames(),
            uses_clip_masks: true,
            overlay_layers: vec![RAINBOW, PARTICLE, BLOB_CIRCLE, BLOB_ELLIPSE, EDGE_GLOW, TEXTURE],
        }
    }
}
