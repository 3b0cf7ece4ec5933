// SPDX-License-Identifier: MPL-2.0
//! Loading and saving `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[carousel]` - Testimonial rotation interval
//! - `[tracking]` - Section visibility threshold
//! - `[diagnostics]` - In-memory diagnostics buffer size
//!
//! Values outside their valid range are kept as written in the file and
//! clamped when read through the typed accessors on [`Config`].
//!
//! # Examples
//!
//! ```no_run
//! use yadadri360::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.carousel.rotation_interval_ms = Some(8_000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::ui::{RotationInterval, VisibilityThreshold};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning surfaced when an existing settings file could not be parsed.
pub const LOAD_WARNING: &str = "Settings could not be read; defaults are in use.";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    #[serde(
        default = "default_rotation_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_interval_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: default_rotation_interval_ms(),
        }
    }
}

/// Section visibility tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingConfig {
    #[serde(
        default = "default_visibility_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility_threshold: Option<f32>,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub tracking: TrackingConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    #[must_use]
    pub fn rotation_interval(&self) -> RotationInterval {
        self.carousel
            .rotation_interval_ms
            .map_or_else(RotationInterval::default, RotationInterval::from_millis)
    }

    #[must_use]
    pub fn visibility_threshold(&self) -> VisibilityThreshold {
        self.tracking
            .visibility_threshold
            .map_or_else(VisibilityThreshold::default, VisibilityThreshold::new)
    }

    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.diagnostics
            .buffer_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_rotation_interval_ms() -> Option<u64> {
    Some(DEFAULT_ROTATION_INTERVAL_MS)
}

fn default_visibility_threshold() -> Option<f32> {
    Some(DEFAULT_VISIBILITY_THRESHOLD)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
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
/// Returns `(config, warning)`. A missing file yields defaults and no
/// warning; an unreadable one yields defaults and [`LOAD_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some(LOAD_WARNING.to_string())),
            };
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
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
