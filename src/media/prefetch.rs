// SPDX-License-Identifier: MPL-2.0
//! Preload cache for priority gallery images.
//!
//! The first tiles of the grid are decoded in the background at startup so
//! they appear without a decode hitch. Everything else is handed to the
//! renderer as a lazy path handle.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently inserted images are evicted first
//! - **Memory-bounded**: Total cache size limited by a byte budget
//! - **Path-keyed**: Images indexed by their file path

use super::{ImageData, ImageProvider, ImageRequest};
use crate::config::{
    CacheConfig, DEFAULT_CACHE_MAX_IMAGES, DEFAULT_CACHE_MAX_MB, MAX_CACHE_MAX_IMAGES,
    MAX_CACHE_MAX_MB, MIN_CACHE_MAX_IMAGES, MIN_CACHE_MAX_MB,
};
use crate::error::Result;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Limits for the preload cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLimits {
    pub max_images: usize,
    pub max_bytes: usize,
}

impl Default for CacheLimits {
    fn default() -> Self {
        Self {
            max_images: DEFAULT_CACHE_MAX_IMAGES,
            max_bytes: DEFAULT_CACHE_MAX_MB * 1024 * 1024,
        }
    }
}

impl From<&CacheConfig> for CacheLimits {
    fn from(config: &CacheConfig) -> Self {
        let max_images = config
            .max_images
            .unwrap_or(DEFAULT_CACHE_MAX_IMAGES)
            .clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES);
        let max_mb = config
            .max_megabytes
            .unwrap_or(DEFAULT_CACHE_MAX_MB)
            .clamp(MIN_CACHE_MAX_MB, MAX_CACHE_MAX_MB);

        Self {
            max_images,
            max_bytes: max_mb * 1024 * 1024,
        }
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub image_count: usize,
    pub total_bytes: usize,
    pub insertions: u64,
    pub evictions: u64,
    pub rejections: u64,
}

/// LRU cache of decoded images, doubling as the default [`ImageProvider`].
pub struct ImageCache {
    cache: LruCache<PathBuf, ImageData>,
    limits: CacheLimits,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    #[must_use]
    pub fn new(limits: CacheLimits) -> Self {
        let capacity = NonZeroUsize::new(limits.max_images).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
            limits,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheLimits::default())
    }

    /// Inserts a decoded image.
    ///
    /// Returns `false` if the image alone exceeds half of the byte budget.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) -> bool {
        let image_size = image.size_bytes();

        if image_size > self.limits.max_bytes / 2 {
            self.stats.rejections += 1;
            return false;
        }

        if let Some(existing) = self.cache.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        while self.current_bytes + image_size > self.limits.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
                self.stats.evictions += 1;
            }
        }

        // `push` returns the LRU entry when the count limit is hit.
        if let Some((_, evicted)) = self.cache.push(path, image) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }
        self.current_bytes += image_size;

        self.stats.insertions += 1;
        self.stats.image_count = self.cache.len();
        self.stats.total_bytes = self.current_bytes;

        true
    }

    /// Checks if an image is cached without updating LRU order.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    /// Returns the cached handle for `path`, if any.
    #[must_use]
    pub fn cached_handle(&self, path: &Path) -> Option<Handle> {
        self.cache.peek(path).map(|image| image.handle.clone())
    }

    /// Returns the paths from `paths` that still need decoding.
    #[must_use]
    pub fn paths_to_preload(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths
            .iter()
            .filter(|p| !self.cache.contains(p.as_path()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl ImageProvider for ImageCache {
    fn handle(&self, request: &ImageRequest<'_>) -> Handle {
        self.cached_handle(request.source)
            .unwrap_or_else(|| Handle::from_path(request.source))
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("limits", &self.limits)
            .field("stats", &self.stats)
            .finish()
    }
}

/// Decodes an image on the blocking pool.
///
/// Returns the path alongside the result so the caller can key the cache.
pub async fn load_image_for_preload(path: PathBuf) -> (PathBuf, Result<ImageData>) {
    let path_clone = path.clone();
    let result = tokio::task::spawn_blocking(move || {
        super::load_image(&path_clone, super::PRELOAD_MAX_EDGE)
    })
    .await
    .unwrap_or_else(|e| {
        Err(crate::error::Error::Io(format!(
            "Preload task failed: {e}"
        )))
    });

    (path, result)
}
