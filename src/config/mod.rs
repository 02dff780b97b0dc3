// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Directory sort order and hover zoom
//! - `[animation]` - Modal reveal timings
//! - `[modal]` - Modal content options
//! - `[cache]` - Priority image preloading limits
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Order of items when the gallery is built from a directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Whether hovering a tile zooms its image.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub hover_zoom: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
            hover_zoom: Some(true),
        }
    }
}

/// Modal reveal timings, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(default = "default_backdrop_ms", skip_serializing_if = "Option::is_none")]
    pub backdrop_ms: Option<u64>,

    #[serde(default = "default_image_ms", skip_serializing_if = "Option::is_none")]
    pub image_ms: Option<u64>,

    #[serde(default = "default_text_ms", skip_serializing_if = "Option::is_none")]
    pub text_ms: Option<u64>,

    #[serde(
        default = "default_text_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_delay_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            backdrop_ms: default_backdrop_ms(),
            image_ms: default_image_ms(),
            text_ms: default_text_ms(),
            text_delay_ms: default_text_delay_ms(),
        }
    }
}

/// Timings resolved from [`AnimationConfig`], clamped to supported bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimings {
    pub backdrop: Duration,
    pub image: Duration,
    pub text: Duration,
    pub text_delay: Duration,
}

impl Default for RevealTimings {
    fn default() -> Self {
        AnimationConfig::default().timings()
    }
}

impl AnimationConfig {
    /// Resolves the configured timings.
    ///
    /// Durations are clamped to `[MIN_TRANSITION_MS, MAX_TRANSITION_MS]`. The
    /// image never finishes before the backdrop, the text delay is at least
    /// `MIN_TEXT_DELAY_MS` and the text never finishes before the image, so
    /// the backdrop-image-text staging always holds.
    #[must_use]
    pub fn timings(&self) -> RevealTimings {
        let clamp = |value: Option<u64>, fallback: u64| {
            value
                .unwrap_or(fallback)
                .clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS)
        };

        let backdrop = clamp(self.backdrop_ms, DEFAULT_BACKDROP_MS);
        let image = clamp(self.image_ms, DEFAULT_IMAGE_MS).max(backdrop);
        let text_delay = self
            .text_delay_ms
            .unwrap_or(DEFAULT_TEXT_DELAY_MS)
            .clamp(MIN_TEXT_DELAY_MS, MAX_TRANSITION_MS);
        // Text must not catch up with the image before the image lands.
        let text = clamp(self.text_ms, DEFAULT_TEXT_MS).max(image.saturating_sub(text_delay));

        RevealTimings {
            backdrop: Duration::from_millis(backdrop),
            image: Duration::from_millis(image),
            text: Duration::from_millis(text),
            text_delay: Duration::from_millis(text_delay),
        }
    }
}

/// Modal content settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModalConfig {
    /// Show the selected item's image above its title.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub show_image: Option<bool>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            show_image: Some(true),
        }
    }
}

/// Priority image preloading limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    #[serde(
        default = "default_cache_max_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_images: Option<usize>,

    #[serde(
        default = "default_cache_max_megabytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_megabytes: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_images: default_cache_max_images(),
            max_megabytes: default_cache_max_megabytes(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub modal: ModalConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_backdrop_ms() -> Option<u64> {
    Some(DEFAULT_BACKDROP_MS)
}

fn default_image_ms() -> Option<u64> {
    Some(DEFAULT_IMAGE_MS)
}

fn default_text_ms() -> Option<u64> {
    Some(DEFAULT_TEXT_MS)
}

fn default_text_delay_ms() -> Option<u64> {
    Some(DEFAULT_TEXT_DELAY_MS)
}

fn default_cache_max_images() -> Option<usize> {
    Some(DEFAULT_CACHE_MAX_IMAGES)
}

fn default_cache_max_megabytes() -> Option<usize> {
    Some(DEFAULT_CACHE_MAX_MB)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                sort_order: Some(SortOrder::ModifiedDate),
                hover_zoom: Some(false),
            },
            animation: AnimationConfig {
                backdrop_ms: Some(400),
                image_ms: Some(900),
                text_ms: Some(450),
                text_delay_ms: Some(250),
            },
            modal: ModalConfig {
                show_image: Some(false),
            },
            cache: CacheConfig::default(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not = [valid").expect("failed to write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.sort_order, Some(SortOrder::Alphabetical));
        assert_eq!(config.gallery.hover_zoom, Some(true));
        assert_eq!(config.animation.backdrop_ms, Some(DEFAULT_BACKDROP_MS));
        assert_eq!(config.modal.show_image, Some(true));
        assert_eq!(config.cache.max_images, Some(DEFAULT_CACHE_MAX_IMAGES));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n")
            .expect("partial config should parse");

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.animation, AnimationConfig::default());
        assert_eq!(config.modal.show_image, Some(true));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"Dark\"\n").expect("should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn default_timings_match_reveal_staging() {
        let timings = RevealTimings::default();
        assert_eq!(timings.backdrop, Duration::from_millis(500));
        assert_eq!(timings.image, Duration::from_millis(700));
        assert_eq!(timings.text, Duration::from_millis(500));
        assert_eq!(timings.text_delay, Duration::from_millis(300));
    }

    #[test]
    fn timings_are_clamped_and_keep_order() {
        let animation = AnimationConfig {
            backdrop_ms: Some(1_000),
            image_ms: Some(10),
            text_ms: Some(99_999),
            text_delay_ms: Some(0),
        };
        let timings = animation.timings();

        assert_eq!(timings.backdrop, Duration::from_millis(1_000));
        assert!(timings.image >= timings.backdrop);
        assert_eq!(timings.text, Duration::from_millis(MAX_TRANSITION_MS));
        assert_eq!(timings.text_delay, Duration::from_millis(MIN_TEXT_DELAY_MS));
    }

    #[test]
    fn short_text_is_stretched_to_land_after_image() {
        let animation = AnimationConfig {
            backdrop_ms: Some(100),
            image_ms: Some(2_000),
            text_ms: Some(100),
            text_delay_ms: Some(300),
        };
        let timings = animation.timings();

        assert_eq!(timings.text, Duration::from_millis(1_700));
        assert!(timings.text_delay + timings.text >= timings.image);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[ not toml")
            .expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("deeper");
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());

        save_with_override(&config, Some(base.clone())).expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(base));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);

        save_to_path(&Config::default(), &path).expect("failed to save config");
        let content = fs::read_to_string(&path).expect("failed to read config");

        assert!(content.contains("[general]"));
        assert!(content.contains("[animation]"));
        assert!(content.contains("[modal]"));
    }
}
