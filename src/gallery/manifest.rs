// SPDX-License-Identifier: MPL-2.0
//! Gallery manifests: TOML files listing the items to show.
//!
//! ```toml
//! [[items]]
//! src = "photos/fox.jpg"
//! alt = "A red fox in the snow"
//! title = "Fox"
//! description = "Taken at dawn."
//! scale = 0.9
//! ```
//!
//! Relative `src` paths are resolved against the manifest's directory.

use super::GalleryItem;
use crate::error::{ManifestError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    items: Vec<GalleryItem>,
}

/// Reads and parses the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Vec<GalleryItem>> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let items = parse_manifest(&content, base_dir)?;
    log::info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Parses manifest text, resolving relative sources against `base_dir`.
pub fn parse_manifest(
    content: &str,
    base_dir: &Path,
) -> std::result::Result<Vec<GalleryItem>, ManifestError> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|err| ManifestError::Parse(err.to_string()))?;

    manifest
        .items
        .into_iter()
        .enumerate()
        .map(|(index, mut item)| {
            if item.source.as_os_str().is_empty() {
                return Err(ManifestError::MissingSource { index });
            }
            if item.source.is_relative() {
                item.source = base_dir.join(&item.source);
            }
            Ok(item)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const TWO_ITEMS: &str = r#"
[[items]]
src = "a.png"
alt = "First image"
title = "A"
description = "The first one."

[[items]]
src = "/abs/b.jpg"
alt = "Second image"
title = "B"
scale = 0.75
"#;

    #[test]
    fn parses_items_in_order() {
        let items = parse_manifest(TWO_ITEMS, Path::new("/gallery")).expect("valid manifest");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "A");
        assert_eq!(items[1].title, "B");
        assert_eq!(items[1].scale(), 0.75);
        assert!(items[1].description.is_empty());
    }

    #[test]
    fn relative_sources_are_resolved_against_base_dir() {
        let items = parse_manifest(TWO_ITEMS, Path::new("/gallery")).expect("valid manifest");

        assert_eq!(items[0].source, PathBuf::from("/gallery/a.png"));
        assert_eq!(items[1].source, PathBuf::from("/abs/b.jpg"));
    }

    #[test]
    fn empty_manifest_yields_no_items() {
        let items = parse_manifest("", Path::new("/")).expect("empty manifest is valid");
        assert!(items.is_empty());
    }

    #[test]
    fn empty_source_is_rejected() {
        let content = "[[items]]\nsrc = \"\"\ntitle = \"Blank\"\n";
        let result = parse_manifest(content, Path::new("/"));
        assert_eq!(result, Err(ManifestError::MissingSource { index: 0 }));
    }

    #[test]
    fn missing_title_is_a_parse_error() {
        let content = "[[items]]\nsrc = \"a.png\"\n";
        let result = parse_manifest(content, Path::new("/"));
        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn load_manifest_reads_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("gallery.toml");
        fs::write(&path, TWO_ITEMS).expect("failed to write manifest");

        let items = load_manifest(&path).expect("manifest should load");
        assert_eq!(items[0].source, dir.path().join("a.png"));
    }

    #[test]
    fn load_manifest_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = load_manifest(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
