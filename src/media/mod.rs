// SPDX-License-Identifier: MPL-2.0
//! Image rendering collaborator.
//!
//! The grid and the modal never decode images themselves. They describe what
//! they want to draw with an [`ImageRequest`] and ask an [`ImageProvider`] for
//! a renderer handle. [`ImageCache`] is the provider used by the application:
//! priority images are decoded ahead of time, everything else is loaded lazily
//! by the renderer.

pub mod image;
pub mod prefetch;

use iced::widget::image::Handle;
use std::path::Path;

pub use image::{load_image, ImageData, PRELOAD_MAX_EDGE};
pub use prefetch::{load_image_for_preload, CacheLimits, CacheStats, ImageCache};

/// Responsive sizing hint: the share of the viewport width an image is
/// expected to occupy on each side of a breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    pub breakpoint: f32,
    pub narrow: f32,
    pub wide: f32,
}

impl SizeHint {
    /// Grid tiles: 45% of the viewport below 768px, 22% above.
    pub const TILE: Self = Self {
        breakpoint: 768.0,
        narrow: 0.45,
        wide: 0.22,
    };

    /// Modal image: most of the viewport when narrow, half of it otherwise.
    pub const MODAL: Self = Self {
        breakpoint: 768.0,
        narrow: 0.9,
        wide: 0.5,
    };

    /// Width in logical pixels the image should be displayed at.
    #[must_use]
    pub fn target_width(&self, viewport_width: f32) -> f32 {
        if viewport_width < self.breakpoint {
            viewport_width * self.narrow
        } else {
            viewport_width * self.wide
        }
    }
}

/// Everything a provider needs to render one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRequest<'a> {
    pub source: &'a Path,
    pub label: &'a str,
    /// Intrinsic width in logical pixels.
    pub width: u32,
    /// Intrinsic height in logical pixels.
    pub height: u32,
    /// Priority images are expected to be available without a decode delay.
    pub priority: bool,
    pub sizes: SizeHint,
}

impl ImageRequest<'_> {
    /// Display size for the given viewport width, keeping the intrinsic
    /// aspect ratio and never exceeding the intrinsic width.
    #[must_use]
    pub fn display_size(&self, viewport_width: f32) -> iced::Size {
        let intrinsic_width = self.width.max(1) as f32;
        let width = self.sizes.target_width(viewport_width).min(intrinsic_width);
        let height = width * self.height as f32 / intrinsic_width;
        iced::Size::new(width, height)
    }
}

/// Capability that turns an [`ImageRequest`] into something the renderer can
/// draw.
pub trait ImageProvider {
    fn handle(&self, request: &ImageRequest<'_>) -> Handle;
}
