use std::collections::HashMap;

use tracing::debug;

use crate::{
    config::Config,
    error::Result,
    styles::{CinematicStyle, CreativeStyle, ModernStyle, Style, StyleKind, StyleParameters},
};

/// Build the strategy for a set of parameters
pub fn build_style(params: StyleParameters) -> Box<dyn Style> {
    match params.kind {
        StyleKind::Cinematic => Box::new(CinematicStyle::new(params)),
        StyleKind::Modern => Box::new(ModernStyle::new(params)),
        StyleKind::Creative => Box::new(CreativeStyle::new(params)),
    }
}

/// Registry of the built-in styles and the session parameters each is built with.
///
/// Lookups by name are how an unknown style identifier is caught before any
/// frame is rendered.
pub struct StyleRegistry {
    parameters: HashMap<StyleKind, StyleParameters>,
}

impl StyleRegistry {
    /// Create a registry with default parameters for every built-in style
    pub fn new() -> Self {
        let parameters = StyleKind::ALL
            .iter()
            .map(|&kind| (kind, StyleParameters::new(kind)))
            .collect();
        Self { parameters }
    }

    /// Create a registry whose styles use the configured transition lengths,
    /// seed, canvas size and particle count
    pub fn from_config(config: &Config) -> Self {
        let parameters = StyleKind::ALL
            .iter()
            .map(|&kind| (kind, config.style_parameters(kind)))
            .collect();
        Self { parameters }
    }

    /// Parameters a style will be built with
    pub fn parameters(&self, kind: StyleKind) -> StyleParameters {
        self.parameters
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| StyleParameters::new(kind))
    }

    /// Build a style by kind
    pub fn build(&self, kind: StyleKind) -> Box<dyn Style> {
        let params = self.parameters(kind);
        debug!(
            "Building {} style: transition {} frames, seed {:#x}",
            kind, params.transition_frames, params.seed
        );
        build_style(params)
    }

    /// Get a style by name.
    ///
    /// Fails with `StyleError::NotFound` for names outside the built-in set.
    pub fn get_style(&self, name: &str) -> Result<Box<dyn Style>> {
        let kind: StyleKind = name.parse()?;
        Ok(self.build(kind))
    }

    /// Get all available style names, in a fixed order
    pub fn available_styles(&self) -> Vec<&'static str> {
        StyleKind::ALL.iter().map(|kind| kind.as_str()).collect()
    }

    /// Check if a style is available
    pub fn has_style(&self, name: &str) -> bool {
        name.parse::<StyleKind>().is_ok()
    }

    /// Get the number of registered styles
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_styles_available() {
        let registry = StyleRegistry::new();

        assert!(registry.has_style("cinematic"));
        assert!(registry.has_style("modern"));
        assert!(registry.has_style("creative"));
        assert!(!registry.has_style("vhs"));

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.available_styles(), vec!["cinematic", "modern", "creative"]);
    }

    #[test]
    fn test_get_style() {
        let registry = StyleRegistry::new();

        let modern = registry.get_style("modern").unwrap();
        assert_eq!(modern.name(), "modern");
        assert_eq!(modern.kind(), StyleKind::Modern);

        assert!(registry.get_style("unknown").is_err());
    }

    #[test]
    fn test_registry_uses_configured_parameters() {
        let mut config = Config::default();
        config.transitions.creative = 40;
        config.seed = 7;

        let registry = StyleRegistry::from_config(&config);
        let creative = registry.build(StyleKind::Creative);
        assert_eq!(creative.parameters().transition_frames, 40);
        assert_eq!(creative.parameters().seed, 7);
    }
}
