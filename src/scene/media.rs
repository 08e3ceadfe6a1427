use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CompositionError, Result};

/// Kind of media behind a [`MediaItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

impl MediaKind {
    /// Infer the kind from a file extension, case-insensitively
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Image)
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// One piece of user media placed on the timeline.
///
/// The engine only carries the source reference through to the scene; it never
/// loads or decodes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaItem {
    /// Caller-assigned identifier
    pub id: String,

    /// Opaque handle the host knows how to load (URL, path, asset key)
    pub source: String,

    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new<I: Into<String>, S: Into<String>>(id: I, source: S, kind: MediaKind) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            kind,
        }
    }

    pub fn image<I: Into<String>, S: Into<String>>(id: I, source: S) -> Self {
        Self::new(id, source, MediaKind::Image)
    }

    pub fn video<I: Into<String>, S: Into<String>>(id: I, source: S) -> Self {
        Self::new(id, source, MediaKind::Video)
    }

    /// Build an item from a file path, using the file stem as id.
    ///
    /// Returns `None` if the extension is not a supported image or video type.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        let kind = MediaKind::from_extension(path.extension()?.to_str()?)?;
        let id = path.file_stem()?.to_str()?.to_string();
        Some(Self::new(id, path.display().to_string(), kind))
    }

    /// Check the item is usable; `index` is its position in the sequence
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CompositionError::InvalidMedia {
                index,
                reason: "id is empty".to_string(),
            }
            .into());
        }

        if self.source.trim().is_empty() {
            return Err(CompositionError::InvalidMedia {
                index,
                reason: format!("media '{}' has an empty source reference", self.id),
            }
            .into());
        }

        Ok(())
    }
}

/// Validate every item of a media sequence
pub fn validate_sequence(items: &[MediaItem]) -> Result<()> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| item.validate(index))
}

/// Output frame dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Horizontal pixel length as a percentage of frame width
    pub fn px_to_pct_x(&self, px: f64) -> f64 {
        px / self.width.max(1) as f64 * 100.0
    }

    /// Vertical pixel length as a percentage of frame height
    pub fn px_to_pct_y(&self, px: f64) -> f64 {
        px / self.height.max(1) as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(MediaKind::from_extension("JPG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_extension("webm"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_extension("txt"), None);
    }

    #[test]
    fn test_from_path() {
        let item = MediaItem::from_path("uploads/beach.mov").unwrap();
        assert_eq!(item.id, "beach");
        assert_eq!(item.kind, MediaKind::Video);
        assert!(MediaItem::from_path("notes.md").is_none());
        assert!(MediaItem::from_path("no_extension").is_none());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(MediaItem::image("a", "a.png").validate(0).is_ok());
        assert!(MediaItem::image("", "a.png").validate(0).is_err());
        assert!(MediaItem::image("a", "  ").validate(0).is_err());

        let sequence = vec![MediaItem::image("a", "a.png"), MediaItem::video("b", "")];
        let err = validate_sequence(&sequence).unwrap_err();
        assert!(err.to_string().contains("Media item 1"));
    }

    #[test]
    fn test_px_conversion() {
        let size = FrameSize::default();
        assert!((size.px_to_pct_x(192.0) - 10.0).abs() < 1e-12);
        assert!((size.px_to_pct_y(108.0) - 10.0).abs() < 1e-12);
    }
}
