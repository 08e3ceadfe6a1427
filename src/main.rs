use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reel_compositor::{
    composition::CompositionEngine,
    config::Config,
    scene::MediaItem,
    styles::StyleRegistry,
};

#[derive(Parser)]
#[command(
    name = "reel-compositor",
    version,
    about = "Describe styled slideshow frames as layered scenes",
    long_about = "Reel-Compositor turns an ordered list of images and videos into per-frame scene descriptions with cinematic, modern or creative transitions, ready for a renderer to rasterize and encode."
)]
struct Cli {
    /// Media files in display order (images or videos)
    media: Vec<PathBuf>,

    /// Transition style (cinematic, modern, creative)
    #[arg(short, long)]
    style: Option<String>,

    /// Output JSON file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render a single frame instead of the whole timeline
    #[arg(short, long)]
    frame: Option<u32>,

    /// Timeline length in frames, overriding the configuration
    #[arg(long)]
    duration: Option<u32>,

    /// Seed for procedural layouts, overriding the configuration
    #[arg(long)]
    seed: Option<u64>,

    /// List available styles and exit
    #[arg(long)]
    list_styles: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean JSON
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.list_styles {
        let registry = StyleRegistry::new();
        for name in registry.available_styles() {
            let style = registry.get_style(name)?;
            println!("{:<10} {}", name, style.description());
        }
        return Ok(());
    }

    info!("Starting Reel-Compositor v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => Config::default(),
    };

    if let Some(duration) = cli.duration {
        config.render.duration_in_frames = duration;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let mut media = Vec::with_capacity(cli.media.len());
    for path in &cli.media {
        match MediaItem::from_path(path) {
            Some(item) => media.push(item),
            None => bail!("Unsupported media file: {:?}", path),
        }
    }

    let style_name = cli.style.clone().unwrap_or_else(|| config.default_style.clone());
    let engine = CompositionEngine::new(config, &style_name, media)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let json = match cli.frame {
        Some(frame) => {
            let scene = engine
                .scene_at(frame)
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            serde_json::to_string_pretty(&scene)?
        }
        None => serde_json::to_string_pretty(&engine.manifest(None)?)?,
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Scene description saved to: {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
