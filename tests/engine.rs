//! Render session behavior: style resolution, batch rendering, manifests.

use reel_compositor::{
    composition::{assemble_scene, CompositionEngine},
    config::Config,
    error::{CompositorError, StyleError},
    scene::MediaItem,
    styles::StyleKind,
};

fn media() -> Vec<MediaItem> {
    vec![
        MediaItem::image("sunrise", "uploads/sunrise.jpg"),
        MediaItem::video("waves", "uploads/waves.mp4"),
        MediaItem::image("dunes", "uploads/dunes.webp"),
    ]
}

fn config(threads: usize) -> Config {
    let mut config = Config::default();
    config.render.threads = threads;
    config
}

#[test]
fn parallel_batch_matches_sequential_assembly() {
    for kind in StyleKind::ALL {
        let config = config(4);
        let params = config.style_parameters(kind);
        let engine = CompositionEngine::new(config, kind.as_str(), media()).unwrap();

        let scenes = engine.render_all().unwrap();
        assert_eq!(scenes.len(), 300);

        for scene in &scenes {
            let sequential = assemble_scene(&media(), &params, scene.frame_index, 300).unwrap();
            assert_eq!(scene.layers, sequential, "{} frame {}", kind, scene.frame_index);
        }
    }
}

#[test]
fn thread_count_does_not_change_output() {
    let single = CompositionEngine::new(config(1), "creative", media()).unwrap();
    let many = CompositionEngine::new(config(8), "creative", media()).unwrap();
    assert_eq!(single.render_all().unwrap(), many.render_all().unwrap());
}

#[test]
fn unknown_style_is_rejected_before_rendering() {
    let err = match CompositionEngine::new(config(1), "vaporwave", media()) {
        Ok(_) => panic!("unknown style should not build a session"),
        Err(err) => err,
    };
    assert!(matches!(err, CompositorError::Style(StyleError::NotFound { .. })));
    assert!(err.user_message().contains("cinematic, modern, creative"));
}

#[test]
fn style_names_are_case_insensitive() {
    let engine = CompositionEngine::new(config(1), "Cinematic", media()).unwrap();
    assert_eq!(engine.style().kind(), StyleKind::Cinematic);
}

#[test]
fn seed_drives_the_particle_layout() {
    let mut seeded = config(2);
    seeded.seed = 99;

    let a = CompositionEngine::new(config(2), "creative", media()).unwrap();
    let b = CompositionEngine::new(config(2), "creative", media()).unwrap();
    let c = CompositionEngine::new(seeded, "creative", media()).unwrap();

    assert_eq!(a.scene_at(42).unwrap(), b.scene_at(42).unwrap());
    assert_ne!(a.scene_at(42).unwrap(), c.scene_at(42).unwrap());
}

#[test]
fn manifest_serializes_to_json() {
    let mut config = config(2);
    config.render.duration_in_frames = 60;
    let engine = CompositionEngine::new(config, "modern", media()).unwrap();

    let manifest = engine.manifest(None).unwrap();
    assert_eq!(manifest.scenes.len(), 60);

    let json = serde_json::to_value(&manifest).unwrap();
    assert_eq!(json["style"], "modern");
    assert_eq!(json["width"], 1920);
    assert_eq!(json["scenes"][0]["frame_index"], 0);
    assert_eq!(json["media"][1]["kind"], "video");
}

#[test]
fn empty_session_renders_placeholders() {
    let mut config = config(2);
    config.render.duration_in_frames = 10;
    let engine = CompositionEngine::new(config, "creative", Vec::new()).unwrap();

    for scene in engine.render_all().unwrap() {
        assert_eq!(scene.layers.len(), 1);
        assert!(scene.layers[0].is_placeholder());
    }
}
