//! Properties every assembled scene must satisfy, across all styles.

use reel_compositor::{
    composition::assemble_scene,
    scene::MediaItem,
    styles::{
        creative::hue_at, modern::slide_offsets, StyleKind, StyleParameters, CURRENT_LAYER,
        NEXT_LAYER,
    },
    timing::compute_timing,
};

fn media(count: usize) -> Vec<MediaItem> {
    (0..count)
        .map(|i| MediaItem::image(format!("item-{}", i), format!("media/{}.jpg", i)))
        .collect()
}

fn layer<'a>(
    layers: &'a [reel_compositor::SceneLayer],
    name: &str,
) -> Option<&'a reel_compositor::SceneLayer> {
    layers.iter().find(|layer| layer.name == name)
}

#[test]
fn same_inputs_same_scene() {
    let items = media(4);
    for kind in StyleKind::ALL {
        let params = StyleParameters::new(kind);
        for frame in [0, 57, 74, 149, 299] {
            let first = assemble_scene(&items, &params, frame, 300).unwrap();
            let second = assemble_scene(&items, &params, frame, 300).unwrap();
            assert_eq!(first, second, "{} frame {}", kind, frame);
        }
    }
}

#[test]
fn empty_sequence_is_a_single_placeholder_for_every_frame() {
    for kind in StyleKind::ALL {
        let params = StyleParameters::new(kind);
        for frame in [0, 150, 299] {
            let layers = assemble_scene(&[], &params, frame, 300).unwrap();
            assert_eq!(layers.len(), 1);
            assert!(layers[0].is_placeholder());
        }
    }
}

#[test]
fn single_item_never_shows_a_next_layer() {
    let items = media(1);
    for kind in StyleKind::ALL {
        let params = StyleParameters::new(kind);
        for frame in 0..300 {
            let layers = assemble_scene(&items, &params, frame, 300).unwrap();
            assert!(layer(&layers, NEXT_LAYER).is_none(), "{} frame {}", kind, frame);
            let current = layer(&layers, CURRENT_LAYER).unwrap();
            assert_eq!(current.opacity, 1.0);
            assert!(current.clip_mask.is_none());
        }
    }
}

#[test]
fn slots_partition_the_timeline_in_order() {
    let mut previous = 0;
    for frame in 0..300 {
        let timing = compute_timing(frame, 300, 3, 45);
        assert!(timing.current_index >= previous);
        assert!(timing.current_index < 3);
        assert_eq!(timing.current_index, frame / 100);
        previous = timing.current_index;
    }
}

#[test]
fn current_layer_shows_the_slot_item() {
    let items = media(3);
    let params = StyleParameters::new(StyleKind::Cinematic);
    for (frame, expected) in [(0, "item-0"), (99, "item-0"), (100, "item-1"), (250, "item-2")] {
        let layers = assemble_scene(&items, &params, frame, 300).unwrap();
        let current = layer(&layers, CURRENT_LAYER).unwrap();
        assert_eq!(current.source_item().unwrap().id, expected);
    }
}

#[test]
fn last_slot_transitions_into_the_first_item() {
    let items = media(3);
    let params = StyleParameters::new(StyleKind::Modern);
    let layers = assemble_scene(&items, &params, 290, 300).unwrap();
    let next = layer(&layers, NEXT_LAYER).unwrap();
    assert_eq!(next.source_item().unwrap().id, "item-0");
}

#[test]
fn cinematic_cross_fade_is_continuous_at_slot_boundaries() {
    let items = media(3);
    let params = StyleParameters::new(StyleKind::Cinematic);
    for boundary in [100, 200] {
        let before = assemble_scene(&items, &params, boundary - 1, 300).unwrap();
        let after = assemble_scene(&items, &params, boundary, 300).unwrap();

        let incoming = layer(&before, NEXT_LAYER).unwrap();
        let arrived = layer(&after, CURRENT_LAYER).unwrap();
        assert_eq!(incoming.source_item(), arrived.source_item());
        assert!((incoming.opacity - arrived.opacity).abs() < 0.01);
    }
}

#[test]
fn modern_slide_is_nearly_complete_on_the_last_slot_frame() {
    let items = media(3);
    let params = StyleParameters::new(StyleKind::Modern);
    let layers = assemble_scene(&items, &params, 99, 300).unwrap();

    let current = layer(&layers, CURRENT_LAYER).unwrap();
    let next = layer(&layers, NEXT_LAYER).unwrap();
    assert!((current.transform.translate_x_percent - 100.0).abs() < 0.01);
    assert!(next.transform.translate_x_percent.abs() < 0.01);

    let (out, incoming) = slide_offsets(&compute_timing(99, 300, 3, 30));
    assert_eq!(out, current.transform.translate_x_percent);
    assert_eq!(incoming, next.transform.translate_x_percent);
}

#[test]
fn creative_hue_closes_the_color_wheel() {
    assert_eq!(hue_at(0, 300), 0.0);
    assert!((hue_at(75, 300) - 60.0).abs() < 1e-9);
    assert!((hue_at(150, 300) - 120.0).abs() < 1e-9);
    assert!((hue_at(300, 300) - 360.0).abs() < 1e-9);
    assert!(hue_at(299, 300) <= 360.0);
}

#[test]
fn overlays_are_present_on_every_media_frame() {
    let items = media(2);
    for kind in StyleKind::ALL {
        let params = StyleParameters::new(kind);
        let style = reel_compositor::styles::build_style(params.clone());
        let overlay_names = style.metadata().overlay_layers;

        for frame in [0, 100, 299] {
            let layers = assemble_scene(&items, &params, frame, 300).unwrap();
            for name in &overlay_names {
                assert!(layer(&layers, name).is_some(), "{} frame {} lacks {}", kind, frame, name);
            }
        }
    }
}

#[test]
fn short_timeline_clamps_the_transition() {
    let items = media(4);
    let params = StyleParameters::new(StyleKind::Creative);
    // 40 frames over 4 items leaves 10-frame slots, shorter than the 60-frame transition
    for frame in 0..40 {
        let layers = assemble_scene(&items, &params, frame, 40).unwrap();
        assert!(layer(&layers, CURRENT_LAYER).is_some());
    }

    let timing = compute_timing(9, 40, 4, 60);
    assert!(timing.transition_clamped);
    assert_eq!(timing.transition_frames, 9);
    assert!(timing.in_transition);
}
