// SPDX-License-Identifier: MPL-2.0
//! Gallery items and the sources they can be loaded from.
//!
//! The grid only consumes an ordered `Vec<GalleryItem>`. This module turns a
//! command-line path into one: a `.toml` manifest is parsed, a directory is
//! scanned for images.

mod item;
pub mod manifest;
pub mod scanner;

pub use item::GalleryItem;

use crate::config::SortOrder;
use crate::error::{ManifestError, Result};
use std::path::Path;

/// Loads gallery items from a manifest file or an image directory.
pub fn load_source(path: &Path, sort_order: SortOrder) -> Result<Vec<GalleryItem>> {
    if path.is_dir() {
        return scanner::scan_directory(path, sort_order);
    }

    let is_manifest = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_manifest {
        manifest::load_manifest(path)
    } else {
        Err(ManifestError::UnsupportedSource.into())
    }
}
