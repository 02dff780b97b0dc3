// SPDX-License-Identifier: MPL-2.0
//! Image decoding for preloaded gallery images.

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// Longest edge kept for preloaded images. Larger images are downscaled
/// since neither tiles nor the modal render above this size.
pub const PRELOAD_MAX_EDGE: u32 = 800;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Decoded size in bytes (RGBA).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Loads and decodes the image at `path`, downscaling it so that neither
/// edge exceeds `max_edge`.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be read and
/// [`crate::error::Error::Image`] if it cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P, max_edge: u32) -> Result<ImageData> {
    let bytes = std::fs::read(path.as_ref())?;
    let mut img = image_rs::load_from_memory(&bytes)?;

    let (width, height) = img.dimensions();
    if width > max_edge || height > max_edge {
        img = img.thumbnail(max_edge, max_edge);
    }

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image.save(&image_path).expect("failed to write png");

        let data = load_image(&image_path, PRELOAD_MAX_EDGE).expect("failed to load png");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.size_bytes(), 32);
    }

    #[test]
    fn large_images_are_downscaled_preserving_aspect_ratio() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("wide.png");

        let image = RgbaImage::from_pixel(40, 20, Rgba([0, 0, 255, 255]));
        image.save(&image_path).expect("failed to write png");

        let data = load_image(&image_path, 10).expect("failed to load png");
        assert_eq!(data.width, 10);
        assert_eq!(data.height, 5);
    }

    #[test]
    fn load_invalid_image_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("broken.png");
        fs::write(&image_path, b"not an image").expect("failed to write file");

        let result = load_image(&image_path, PRELOAD_MAX_EDGE);
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_image(temp_dir.path().join("absent.png"), PRELOAD_MAX_EDGE);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
