use tracing::trace;

use crate::{
    error::{CompositionError, Result},
    scene::{media::validate_sequence, MediaItem, SceneLayer},
    styles::{build_style, Style, StyleParameters},
    timing::compute_timing,
};

/// z-order of the first decorative overlay; media layers sit below it
pub const OVERLAY_Z_BASE: i32 = 10;

/// Assemble the layers of one frame.
///
/// # Arguments
///
/// * `media` - Ordered media sequence of the session
/// * `params` - Style and session parameters
/// * `frame_index` - Frame to render, `0 <= frame_index < total_frames`
/// * `total_frames` - Length of the timeline
///
/// An empty sequence renders the style's placeholder. Out-of-range frames and
/// malformed media are host bugs and fail with a descriptive error.
pub fn assemble_scene(
    media: &[MediaItem],
    params: &StyleParameters,
    frame_index: u32,
    total_frames: u32,
) -> Result<Vec<SceneLayer>> {
    params.validate()?;
    validate_sequence(media)?;
    let style = build_style(params.clone());
    assemble_with_style(style.as_ref(), media, frame_index, total_frames)
}

/// Assemble one frame with an already built style. Media is assumed validated.
pub(crate) fn assemble_with_style(
    style: &dyn Style,
    media: &[MediaItem],
    frame_index: u32,
    total_frames: u32,
) -> Result<Vec<SceneLayer>> {
    check_frame(frame_index, total_frames)?;

    if media.is_empty() {
        trace!("Frame {}: empty sequence, rendering placeholder", frame_index);
        return Ok(vec![style.placeholder()]);
    }

    let item_count = u32::try_from(media.len()).map_err(|_| CompositionError::InvalidParameters {
        details: format!("{} media items exceed the supported sequence length", media.len()),
    })?;

    let timing = compute_timing(
        frame_index,
        total_frames,
        item_count,
        style.parameters().transition_frames,
    );

    let Some(current) = media.get(timing.current_index as usize) else {
        trace!(
            "Frame {}: slot {} has no media item, rendering placeholder",
            frame_index,
            timing.current_index
        );
        return Ok(vec![style.placeholder()]);
    };

    let next = if timing.in_transition && timing.has_distinct_next() {
        media.get(timing.next_index as usize)
    } else {
        None
    };

    let mut layers = style.render_frame(&timing, current, next);
    layers.extend(
        style
            .overlays(&timing)
            .into_iter()
            .zip(OVERLAY_Z_BASE..)
            .map(|(layer, z_order)| layer.at_z(z_order)),
    );

    Ok(layers)
}

fn check_frame(frame_index: u32, total_frames: u32) -> Result<()> {
    if total_frames == 0 {
        return Err(CompositionError::InvalidParameters {
            details: "timeline must contain at least one frame".to_string(),
        }
        .into());
    }

    if frame_index >= total_frames {
        return Err(CompositionError::FrameOutOfRange {
            frame: frame_index,
            total_frames,
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::{StyleKind, NEXT_LAYER};

    fn sequence(count: usize) -> Vec<MediaItem> {
        (0..count)
            .map(|i| MediaItem::image(format!("item-{}", i), format!("media/{}.jpg", i)))
            .collect()
    }

    #[test]
    fn test_empty_sequence_renders_placeholder() {
        let params = StyleParameters::new(StyleKind::Modern);
        let layers = assemble_scene(&[], &params, 42, 300).unwrap();
        assert_eq!(layers.len(), 1);
        assert!(layers[0].is_placeholder());
    }

    #[test]
    fn test_frame_out_of_range_fails_fast() {
        let params = StyleParameters::new(StyleKind::Cinematic);
        let err = assemble_scene(&sequence(3), &params, 300, 300).unwrap_err();
        assert!(err.is_contract_violation());
        assert!(assemble_scene(&sequence(3), &params, 0, 0).is_err());
    }

    #[test]
    fn test_malformed_media_fails_fast() {
        let params = StyleParameters::new(StyleKind::Cinematic);
        let mut media = sequence(2);
        media[1].source.clear();
        assert!(assemble_scene(&media, &params, 0, 300).is_err());
    }

    #[test]
    fn test_overlays_stack_above_media() {
        let params = StyleParameters::new(StyleKind::Modern);
        let layers = assemble_scene(&sequence(3), &params, 90, 300).unwrap();
        assert_eq!(layers[1].name, NEXT_LAYER);

        let overlay_z: Vec<i32> = layers[2..].iter().map(|l| l.z_order).collect();
        let expected: Vec<i32> = (OVERLAY_Z_BASE..OVERLAY_Z_BASE + overlay_z.len() as i32).collect();
        assert_eq!(overlay_z, expected);
    }

    #[test]
    fn test_trailing_frames_render_placeholder() {
        let params = StyleParameters::new(StyleKind::Creative);
        let layers = assemble_scene(&sequence(3), &params, 300, 301).unwrap();
        assert_eq!(layers.len(), 1);
        assert!(layers[0].is_placeholder());
    }

    #[test]
    fn test_oversized_particle_field_rejected() {
        let params = StyleParameters::new(StyleKind::Creative).with_particle_count(50);
        assert!(assemble_scene(&sequence(1), &params, 0, 300).is_err());
    }
}
