// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Animation**: Modal reveal timings and their bounds
//! - **Hover**: Tile hover zoom
//! - **Cache**: Priority image preloading limits

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Backdrop fade duration (milliseconds).
pub const DEFAULT_BACKDROP_MS: u64 = 500;

/// Image grow-in duration (milliseconds).
pub const DEFAULT_IMAGE_MS: u64 = 700;

/// Text settle duration (milliseconds).
pub const DEFAULT_TEXT_MS: u64 = 500;

/// Delay before the text block starts settling (milliseconds).
pub const DEFAULT_TEXT_DELAY_MS: u64 = 300;

/// Minimum duration accepted for any reveal layer (milliseconds).
pub const MIN_TRANSITION_MS: u64 = 50;

/// Maximum duration accepted for any reveal layer (milliseconds).
pub const MAX_TRANSITION_MS: u64 = 3_000;

/// Minimum text delay so the text always follows the image (milliseconds).
pub const MIN_TEXT_DELAY_MS: u64 = 1;

// ==========================================================================
// Hover Defaults
// ==========================================================================

/// Scale applied to a tile image while hovered.
pub const HOVER_ZOOM_SCALE: f32 = 1.1;

/// Hover zoom duration (milliseconds).
pub const HOVER_ZOOM_MS: u64 = 300;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_CACHE_MAX_IMAGES: usize = 16;

/// Minimum number of decoded images kept in memory.
pub const MIN_CACHE_MAX_IMAGES: usize = 4;

/// Maximum number of decoded images kept in memory.
pub const MAX_CACHE_MAX_IMAGES: usize = 64;

/// Default decoded image budget (megabytes).
pub const DEFAULT_CACHE_MAX_MB: usize = 64;

/// Minimum decoded image budget (megabytes).
pub const MIN_CACHE_MAX_MB: usize = 8;

/// Maximum decoded image budget (megabytes).
pub const MAX_CACHE_MAX_MB: usize = 512;

const _: () = {
    assert!(DEFAULT_BACKDROP_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_IMAGE_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_TEXT_DELAY_MS >= MIN_TEXT_DELAY_MS);
    assert!(MIN_CACHE_MAX_IMAGES <= DEFAULT_CACHE_MAX_IMAGES);
    assert!(DEFAULT_CACHE_MAX_MB <= MAX_CACHE_MAX_MB);
};
