use crate::{
    animation::{interpolate, Easing, InterpolateOptions},
    scene::{BlendMode, Color, GradientStop, LayerContent, MediaItem, Region, SceneLayer, Transform},
    styles::{Style, StyleKind, StyleMetadata, StyleParameters, CURRENT_LAYER, CURRENT_Z, NEXT_LAYER, NEXT_Z},
    timing::TimingContext,
};

use super::{
    COLOR_OVERLAY, EDGE_BOTTOM, EDGE_TOP, FILLED_SQUARE, GRID_LINE_LEFT, GRID_LINE_RIGHT,
    OUTLINE_SQUARE,
};

const ACCENT_BLUE: Color = Color::rgba(59, 130, 246, 0.4);
const EDGE_SHADE: Color = Color::rgba(0, 0, 0, 0.4);
const GRID_COLOR: Color = Color::rgba(255, 255, 255, 0.1);

/// Modern transition style
pub struct ModernStyle {
    params: StyleParameters,
}

impl ModernStyle {
    pub fn new(params: StyleParameters) -> Self {
        Self { params }
    }

    fn color_overlay(&self, timing: &TimingContext) -> SceneLayer {
        let slot = timing.slot_length as f64;
        let opacity = interpolate(
            timing.local(),
            [0.0, 30.0, slot - 30.0, slot],
            [0.2, 0.1, 0.1, 0.2],
            InterpolateOptions::clamped(Easing::QuadInOut),
        );

        SceneLayer::new(
            COLOR_OVERLAY,
            LayerContent::LinearGradient {
                angle_degrees: 135.0,
                stops: vec![
                    GradientStop::new(0.0, Color::rgba(59, 130, 246, 0.3)),
                    GradientStop::new(1.0, Color::rgba(16, 185, 129, 0.3)),
                ],
            },
        )
        .with_opacity(opacity)
        .with_blend(BlendMode::Multiply)
    }

    /// 100px outlined square, 10% in from the top-right corner
    fn outline_square(&self, rotation: f64) -> SceneLayer {
        let canvas = self.params.canvas;
        let width = canvas.px_to_pct_x(100.0);
        let height = canvas.px_to_pct_y(100.0);

        SceneLayer::new(
            OUTLINE_SQUARE,
            LayerContent::Outline {
                color: Color::rgba(255, 255, 255, 0.3),
                stroke_px: 3.0,
            },
        )
        .with_region(Region::new(90.0 - width, 10.0, width, height))
        .with_transform(Transform::rotate(rotation))
    }

    /// 60px filled square, 15% in from the bottom-left corner
    fn filled_square(&self, rotation: f64) -> SceneLayer {
        let canvas = self.params.canvas;
        let width = canvas.px_to_pct_x(60.0);
        let height = canvas.px_to_pct_y(60.0);

        SceneLayer::new(FILLED_SQUARE, LayerContent::Fill { color: ACCENT_BLUE })
            .with_region(Region::new(15.0, 85.0 - height, width, height))
            .with_transform(Transform::rotate(-rotation))
    }

    fn grid_line(&self, name: &'static str, x: f64) -> SceneLayer {
        let width = self.params.canvas.px_to_pct_x(1.0);
        SceneLayer::new(name, LayerContent::Fill { color: GRID_COLOR })
            .with_region(Region::new(x, 0.0, width, 100.0))
    }

    fn edge(name: &'static str, region: Region, angle_degrees: f64) -> SceneLayer {
        SceneLayer::new(
            name,
            LayerContent::LinearGradient {
                angle_degrees,
                stops: vec![
                    GradientStop::new(0.0, EDGE_SHADE),
                    GradientStop::new(1.0, Color::TRANSPARENT),
                ],
            },
        )
        .with_region(region)
    }
}

/// Rotation of the geometric shapes: one full turn over the whole timeline
pub fn shape_rotation(frame: u32, total_frames: u32) -> f64 {
    interpolate(
        frame as f64,
        [0.0, total_frames as f64],
        [0.0, 360.0],
        InterpolateOptions::clamped(Easing::Linear),
    )
}

/// Horizontal offsets in percent of the outgoing and incoming layers
pub fn slide_offsets(timing: &TimingContext) -> (f64, f64) {
    let slide = InterpolateOptions::clamped(Easing::CubicOut);
    let window = timing.transition_window();
    (
        interpolate(timing.local(), window, [0.0, 100.0], slide),
        interpolate(timing.local(), window, [-100.0, 0.0], slide),
    )
}

impl Style for ModernStyle {
    fn description(&self) -> &str {
        "Clean, sharp transitions with geometric shapes, smooth slides, and contemporary effects"
    }

    fn kind(&self) -> StyleKind {
        StyleKind::Modern
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
        let slot = timing.slot_length as f64;
        let scale = interpolate(
            timing.local(),
            [0.0, 15.0, slot - 15.0, slot],
            [0.95, 1.0, 1.0, 1.05],
            InterpolateOptions::clamped(Easing::QuadOut),
        );

        let Some(next) = next else {
            return vec![SceneLayer::media(CURRENT_LAYER, current)
                .at_z(CURRENT_Z)
                .with_transform(Transform::scale(scale))];
        };

        let (slide_out, slide_in) = slide_offsets(timing);
        vec![
            SceneLayer::media(CURRENT_LAYER, current)
                .at_z(CURRENT_Z)
                .with_transform(Transform::translate_x(slide_out).with_scale(scale)),
            SceneLayer::media(NEXT_LAYER, next)
                .at_z(NEXT_Z)
                .with_transform(Transform::translate_x(slide_in)),
        ]
    }

    fn overlays(&self, timing: &TimingContext) -> Vec<SceneLayer> {
        let rotation = shape_rotation(timing.frame_index, timing.total_frames);

        vec![
            self.color_overlay(timing),
            self.outline_square(rotation),
            self.filled_square(rotation),
            self.grid_line(GRID_LINE_LEFT, 33.33),
            self.grid_line(GRID_LINE_RIGHT, 66.66),
            Self::edge(EDGE_TOP, Region::top_band(20.0), 180.0),
            Self::edge(EDGE_BOTTOM, Region::bottom_band(20.0), 0.0),
        ]
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            display_name: "Modern".to_string(),
            default_transition_frames: StyleKind::Modern.default_transition_frames(),
            uses_clip_masks: false,
            overlay_layers: vec![
                COLOR_OVERLAY,
                OUTLINE_SQUARE,
                FILLED_SQUARE,
                GRID_LINE_LEFT,
                GRID_LINE_RIGHT,
                EDGE_TOP,
                EDGE_BOTTOM,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::compute_timing;

    fn style() -> ModernStyle {
        ModernStyle::new(StyleParameters::new(StyleKind::Modern))
    }

    #[test]
    fn test_slide_close_to_full_at_last_frame() {
        let timing = compute_timing(99, 300, 3, 30);
        let (out, incoming) = slide_offsets(&timing);
        assert!(out > 99.9 && out <= 100.0);
        assert!(incoming > -0.1 && incoming <= 0.0);
    }

    #[test]
    fn test_no_slide_before_window() {
        let timing = compute_timing(70, 300, 3, 30);
        assert_eq!(slide_offsets(&timing), (0.0, -100.0));
    }

    #[test]
    fn test_transition_layers() {
        let timing = compute_timing(85, 300, 3, 30);
        let a = MediaItem::image("a", "a.png");
        let b = MediaItem::video("b", "b.mp4");
        let layers = style().render_frame(&timing, &a, Some(&b));

        assert_eq!(layers.len(), 2);
        assert!(layers[0].transform.translate_x_percent > 0.0);
        assert!(layers[1].transform.translate_x_percent < 0.0);
        assert_eq!(layers[1].transform.scale_x, 1.0);
        assert_eq!(layers[0].opacity, 1.0);
    }

    #[test]
    fn test_scale_control_points() {
        let a = MediaItem::image("a", "a.png");
        let at = |frame| style().render_frame(&compute_timing(frame, 300, 3, 30), &a, None)[0].transform.scale_x;
        assert!((at(0) - 0.95).abs() < 1e-12);
        assert!((at(50) - 1.0).abs() < 1e-12);
        assert!(at(99) > 1.0 && at(99) < 1.05);
    }

    #[test]
    fn test_shapes_rotate_in_opposite_directions() {
        let timing = compute_timing(150, 300, 3, 30);
        let overlays = style().overlays(&timing);
        let outline = overlays.iter().find(|l| l.name == OUTLINE_SQUARE).unwrap();
        let filled = overlays.iter().find(|l| l.name == FILLED_SQUARE).unwrap();
        assert!((outline.transform.rotation_degrees - 180.0).abs() < 1e-12);
        assert!((filled.transform.rotation_degrees + 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_color_overlay_opacity_cycle() {
        let opacity = |frame| style().color_overlay(&compute_timing(frame, 300, 3, 30)).opacity;
        assert!((opacity(0) - 0.2).abs() < 1e-12);
        assert!((opacity(50) - 0.1).abs() < 1e-12);
        assert!(opacity(99) > 0.19);
    }

    #[test]
    fn test_overlay_order_matches_metadata() {
        let timing = compute_timing(0, 300, 3, 30);
        let names: Vec<_> = style().overlays(&timing).iter().map(|l| l.name).collect();
        assert_eq!(names, style().metadata().overlay_layers);
    }
}
