use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    scene::FrameSize,
    styles::{creative::MAX_PARTICLES, StyleKind, StyleParameters, DEFAULT_SEED},
};

/// Main configuration for the Reel-Compositor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Style used when none is requested explicitly
    pub default_style: String,

    /// Seed for every procedural layout of a render session
    pub seed: u64,

    /// Output settings
    pub render: RenderConfig,

    /// Per-style transition lengths
    pub transitions: TransitionConfig,

    /// Creative style settings
    pub creative: CreativeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_style: StyleKind::Cinematic.as_str().to_string(),
            seed: DEFAULT_SEED,
            render: RenderConfig::default(),
            transitions: TransitionConfig::default(),
            creative: CreativeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_style.parse::<StyleKind>().is_err() {
            return Err(ConfigError::InvalidValue {
                key: "default_style".to_string(),
                value: self.default_style.clone(),
            }
            .into());
        }

        self.render.validate()?;
        self.transitions.validate()?;
        self.creative.validate()?;
        Ok(())
    }

    /// Session parameters for a style, as configured
    pub fn style_parameters(&self, kind: StyleKind) -> StyleParameters {
        StyleParameters::new(kind)
            .with_transition_frames(self.transitions.for_kind(kind))
            .with_seed(self.seed)
            .with_canvas(self.render.frame_size())
            .with_particle_count(self.creative.particle_count)
    }
}

/// Output settings of a render session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Frames per second of the exported video
    pub fps: u32,

    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    /// Length of the timeline in frames
    pub duration_in_frames: u32,

    /// Worker threads for batch scene rendering
    pub threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            width: 1920,
            height: 1080,
            duration_in_frames: 300,
            threads: num_cpus::get(),
        }
    }
}

impl RenderConfig {
    pub fn frame_size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }

    /// Timeline length in seconds
    pub fn duration_secs(&self) -> f64 {
        self.duration_in_frames as f64 / self.fps.max(1) as f64
    }

    fn validate(&self) -> Result<()> {
        let positive = [
            ("render.fps", self.fps as usize),
            ("render.width", self.width as usize),
            ("render.height", self.height as usize),
            ("render.duration_in_frames", self.duration_in_frames as usize),
            ("render.threads", self.threads),
        ];

        for (key, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// Transition window length per style, in frames
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub cinematic: u32,
    pub modern: u32,
    pub creative: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            cinematic: StyleKind::Cinematic.default_transition_frames(),
            modern: StyleKind::Modern.default_transition_frames(),
            creative: StyleKind::Creative.default_transition_frames(),
        }
    }
}

impl TransitionConfig {
    pub fn for_kind(&self, kind: StyleKind) -> u32 {
        match kind {
            StyleKind::Cinematic => self.cinematic,
            StyleKind::Modern => self.modern,
            StyleKind::Creative => self.creative,
        }
    }

    fn validate(&self) -> Result<()> {
        for kind in StyleKind::ALL {
            let frames = self.for_kind(kind);
            if frames == 0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("transitions.{}", kind),
                    value: frames.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Creative style settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CreativeConfig {
    /// Particles in the floating particle field
    pub particle_count: usize,
}

impl Default for CreativeConfig {
    fn default() -> Self {
        Self {
            particle_count: MAX_PARTICLES,
        }
    }
}

impl CreativeConfig {
    fn validate(&self) -> Result<()> {
        if self.particle_count > MAX_PARTICLES {
            return Err(ConfigError::InvalidValue {
                key: "creative.particle_count".to_string(),
                value: self.particle_count.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
