use std::ops::Range;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    composition::assembler::assemble_with_style,
    config::Config,
    error::{CompositorError, Result},
    scene::{media::validate_sequence, MediaItem, SceneLayer},
    styles::{Style, StyleRegistry},
    timing::compute_timing,
};

/// Layers of one rendered frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub frame_index: u32,
    pub layers: Vec<SceneLayer>,
}

/// Everything a host needs to rasterize and encode a session
#[derive(Debug, Clone, Serialize)]
pub struct RenderManifest {
    pub style: String,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
    pub total_frames: u32,
    pub media: Vec<MediaItem>,
    pub scenes: Vec<Scene>,
}

/// One render session: a validated media sequence, a built style and the
/// render settings.
///
/// Frames are independent; any subset can be rendered in any order, from any
/// thread, and always yields the same scenes.
pub struct CompositionEngine {
    config: Config,
    media: Vec<MediaItem>,
    style: Box<dyn Style>,
    pool: rayon::ThreadPool,
}

impl CompositionEngine {
    /// Create a session for a named style.
    ///
    /// Unknown style names, malformed media and invalid configuration are all
    /// reported here, before any frame is computed.
    pub fn new(config: Config, style_name: &str, media: Vec<MediaItem>) -> Result<Self> {
        let style = StyleRegistry::from_config(&config).get_style(style_name)?;
        Self::with_style(config, style, media)
    }

    /// Create a session with an already built style
    pub fn with_style(config: Config, style: Box<dyn Style>, media: Vec<MediaItem>) -> Result<Self> {
        config.validate()?;
        style.parameters().validate()?;
        validate_sequence(&media)?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.render.threads)
            .build()
            .map_err(|e| CompositorError::generic(format!("failed to build render pool: {}", e)))?;

        let engine = Self {
            config,
            media,
            style,
            pool,
        };
        engine.log_session();
        Ok(engine)
    }

    fn log_session(&self) {
        let total_frames = self.total_frames();
        info!(
            "Render session: {} style, {} media items, {} frames at {} fps",
            self.style.name(),
            self.media.len(),
            total_frames,
            self.config.render.fps
        );

        if self.media.is_empty() {
            warn!("Media sequence is empty; every frame renders the placeholder");
            return;
        }

        let item_count = self.media.len() as u32;
        let timing = compute_timing(0, total_frames, item_count, self.style.parameters().transition_frames);
        debug!(
            "   Slot length: {} frames, transition: {} frames, seed: {:#x}",
            timing.slot_length,
            timing.transition_frames,
            self.style.parameters().seed
        );

        if timing.transition_clamped {
            warn!(
                "Transition of {} frames does not fit {}-frame slots; clamped to {}",
                self.style.parameters().transition_frames,
                timing.slot_length,
                timing.transition_frames
            );
        }

        let covered = timing.slot_length.saturating_mul(item_count);
        if covered < total_frames {
            warn!(
                "{} trailing frames fall past the last slot and render the placeholder",
                total_frames - covered
            );
        }
    }

    pub fn style(&self) -> &dyn Style {
        self.style.as_ref()
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn total_frames(&self) -> u32 {
        self.config.render.duration_in_frames
    }

    /// Render a single frame
    pub fn scene_at(&self, frame_index: u32) -> Result<Scene> {
        let layers = assemble_with_style(self.style.as_ref(), &self.media, frame_index, self.total_frames())?;
        Ok(Scene { frame_index, layers })
    }

    /// Render a range of frames in parallel; scenes come back in frame order
    pub fn render_range(&self, frames: Range<u32>) -> Result<Vec<Scene>> {
        debug!("Rendering frames {}..{}", frames.start, frames.end);
        self.pool
            .install(|| frames.into_par_iter().map(|frame| self.scene_at(frame)).collect())
    }

    /// Render every frame of the timeline
    pub fn render_all(&self) -> Result<Vec<Scene>> {
        let scenes = self.render_range(0..self.total_frames())?;
        info!(
            "Rendered {} scenes ({} layers)",
            scenes.len(),
            scenes.iter().map(|scene| scene.layers.len()).sum::<usize>()
        );
        Ok(scenes)
    }

    /// Render the given frames (or the whole timeline) into a manifest
    pub fn manifest(&self, frames: Option<Range<u32>>) -> Result<RenderManifest> {
        let scenes = match frames {
            Some(range) => self.render_range(range)?,
            None => self.render_all()?,
        };

        Ok(RenderManifest {
            style: self.style.name().to_string(),
            fps: self.config.render.fps,
            width: self.config.render.width,
            height: self.config.render.height,
            total_frames: self.total_frames(),
            media: self.media.clone(),
            scenes,
        })
    }
}
