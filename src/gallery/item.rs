// SPDX-License-Identifier: MPL-2.0
//! The gallery item record supplied by callers.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One image shown in the gallery.
///
/// Items are immutable once handed to the grid. Optional fields degrade
/// gracefully: an absent description renders as empty text and an absent
/// scale renders at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Image location on disk.
    #[serde(rename = "src")]
    pub source: PathBuf,

    /// Accessible label for the image.
    #[serde(default)]
    pub alt: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Per-tile scale factor applied in the grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl GalleryItem {
    pub fn new(
        source: impl Into<PathBuf>,
        alt: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            alt: alt.into(),
            title: title.into(),
            description: String::new(),
            scale: None,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Scale applied to the tile, defaulting to 1.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.unwrap_or(1.0)
    }

    /// Alt text, or the title when no alt text was given.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.alt.trim().is_empty() {
            &self.title
        } else {
            &self.alt
        }
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }
}
