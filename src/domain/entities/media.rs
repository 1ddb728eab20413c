//! Media references attached to content records.

use serde::{Deserialize, Serialize};

/// How a media reference is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// A photograph or illustration rendered as `<img>`.
    Image,
    /// A decorative background pattern.
    Pattern,
}

/// An image or pattern with its alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub kind: MediaKind,
    pub src: String,
    pub alt: String,
}

impl Media {
    /// Returns true when the media is a foreground image.
    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }
}
