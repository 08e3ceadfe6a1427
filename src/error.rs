use thiserror::Error;

/// Main error type for the Reel-Compositor library
#[derive(Error, Debug)]
pub enum CompositorError {
    #[error("Composition error: {0}")]
    Composition(#[from] CompositionError),

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Errors raised when the host violates the scene assembly contract
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositionError {
    #[error("Frame {frame} is outside the timeline of {total_frames} frames")]
    FrameOutOfRange { frame: u32, total_frames: u32 },

    #[error("Media item {index} is malformed: {reason}")]
    InvalidMedia { index: usize, reason: String },

    #[error("Invalid composition parameters: {details}")]
    InvalidParameters { details: String },
}

/// Style-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Style not found: {name}")]
    NotFound { name: String },

    #[error("Style configuration invalid: {details}")]
    InvalidConfig { details: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using CompositorError
pub type Result<T> = std::result::Result<T, CompositorError>;

impl CompositorError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Whether the error stems from a host-side contract violation
    /// (bad frame index, malformed media) rather than from configuration.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::Composition(CompositionError::FrameOutOfRange { .. })
                | Self::Composition(CompositionError::InvalidMedia { .. })
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Style(StyleError::NotFound { name }) => {
                format!(
                    "Style '{}' not found. Available styles: {}",
                    name,
                    crate::styles::StyleKind::ALL
                        .iter()
                        .map(|kind| kind.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            Self::Composition(CompositionError::FrameOutOfRange { frame, total_frames }) => {
                format!(
                    "Frame {} was requested but the composition only has frames 0..{}.",
                    frame, total_frames
                )
            }
            _ => self.to_string(),
        }
    }
}
