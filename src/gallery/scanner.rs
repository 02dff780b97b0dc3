// SPDX-License-Identifier: MPL-2.0
//! Builds a gallery from the images found in a directory.
//!
//! Supported image files are collected, sorted according to the configured
//! sort order, and turned into items whose title is derived from the file name.

use super::GalleryItem;
use crate::config::SortOrder;
use crate::error::Result;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif", "ico",
];

/// Scans `directory` (non-recursively) for supported images.
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<GalleryItem>> {
    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files, sort_order);
    log::info!(
        "Found {} images in {}",
        image_files.len(),
        directory.display()
    );

    Ok(image_files.into_iter().map(item_from_path).collect())
}

/// Checks if a file has a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
}

fn item_from_path(path: PathBuf) -> GalleryItem {
    let title = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(title_from_stem)
        .unwrap_or_default();
    GalleryItem::new(path, title.clone(), title)
}

/// Turns `red_fox-2` into `Red fox 2`.
fn title_from_stem(stem: &str) -> String {
    let words: Vec<&str> = stem
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect();
    let joined = words.join(" ");

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => stem.to_string(),
    }
}

fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
    }
}
