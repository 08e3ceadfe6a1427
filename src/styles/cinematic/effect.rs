use crate::{
    animation::{interpolate, Easing, InterpolateOptions},
    scene::{BlendMode, Color, GradientStop, LayerContent, MediaItem, RadialShape, Region, SceneLayer, Transform},
    styles::{Style, StyleKind, StyleMetadata, StyleParameters, CURRENT_LAYER, CURRENT_Z, NEXT_LAYER, NEXT_Z},
    timing::TimingContext,
};

use super::{COLOR_GRADING, FILM_GRAIN, LETTERBOX_BOTTOM, LETTERBOX_HEIGHT, LETTERBOX_TOP, VIGNETTE};

/// Cinematic transition style
pub struct CinematicStyle {
    params: StyleParameters,
}

impl CinematicStyle {
    pub fn new(params: StyleParameters) -> Self {
        Self { params }
    }

    fn vignette(&self) -> SceneLayer {
        SceneLayer::new(
            VIGNETTE,
            LayerContent::RadialGradient {
                shape: RadialShape::Circle,
                stops: vec![
                    GradientStop::new(0.3, Color::TRANSPARENT),
                    GradientStop::new(1.0, Color::rgba(0, 0, 0, 0.4)),
                ],
            },
        )
    }

    fn color_grading(&self) -> SceneLayer {
        SceneLayer::new(
            COLOR_GRADING,
            LayerContent::LinearGradient {
                angle_degrees: 45.0,
                stops: vec![
                    GradientStop::new(0.0, Color::rgba(255, 138, 76, 0.1)),
                    GradientStop::new(1.0, Color::rgba(255, 69, 90, 0.1)),
                ],
            },
        )
        .with_blend(BlendMode::Multiply)
    }

    fn film_grain(&self, frame: u32) -> SceneLayer {
        SceneLayer::new(
            FILM_GRAIN,
            LayerContent::Noise {
                base_frequency: 0.9,
                octaves: 1,
                seed: self.params.seed,
            },
        )
        .with_opacity(grain_opacity(frame))
        .with_blend(BlendMode::Overlay)
    }

    fn letterbox(name: &'static str, region: Region) -> SceneLayer {
        SceneLayer::new(name, LayerContent::Fill { color: Color::BLACK }).with_region(region)
    }
}

/// Film grain opacity at a global frame.
///
/// Eases from 0.03 to 0.06 over the first 30 frames and keeps following the
/// sinusoid afterwards, so the grain breathes on a 60-frame cycle for the whole
/// timeline instead of resetting per slot.
pub fn grain_opacity(frame: u32) -> f64 {
    interpolate(
        frame as f64,
        [0.0, 30.0],
        [0.03, 0.06],
        InterpolateOptions::extended(Easing::SinInOut),
    )
}

impl Style for CinematicStyle {
    fn description(&self) -> &str {
        "Epic transitions with dramatic fades, zoom effects, and film-like color grading"
    }

    fn kind(&self) -> StyleKind {
        StyleKind::Cinematic
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

        // Zoom runs across the whole slot, not only the transition window
        let zoom = interpolate(
            local,
            timing.slot_window(),
            [1.0, 1.1],
            InterpolateOptions::clamped(Easing::QuadOut),
        );
        let current_layer = SceneLayer::media(CURRENT_LAYER, current)
            .at_z(CURRENT_Z)
            .with_transform(Transform::scale(zoom));

        let Some(next) = next else {
            return vec![current_layer];
        };

        let fade = InterpolateOptions::clamped(Easing::CubicInOut);
        let window = timing.transition_window();
        let fade_out = interpolate(local, window, [1.0, 0.0], fade);
        let fade_in = interpolate(local, window, [0.0, 1.0], fade);

        vec![
            current_layer.with_opacity(fade_out),
            SceneLayer::media(NEXT_LAYER, next)
                .at_z(NEXT_Z)
                .with_opacity(fade_in),
        ]
    }

    fn overlays(&self, timing: &TimingContext) -> Vec<SceneLayer> {
        vec![
            self.vignette(),
            self.color_grading(),
            self.film_grain(timing.frame_index),
            Self::letterbox(LETTERBOX_TOP, Region::top_band(LETTERBOX_HEIGHT)),
            Self::letterbox(LETTERBOX_BOTTOM, Region::bottom_band(LETTERBOX_HEIGHT)),
        ]
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            display_name: "Cinematic".to_string(),
            default_transition_frames: StyleKind::Cinematic.default_transition_frames(),
            uses_clip_masks: false,
            overlay_layers: vec![VIGNETTE, COLOR_GRADING, FILM_GRAIN, LETTERBOX_TOP, LETTERBOX_BOTTOM],
        }
    }
}
