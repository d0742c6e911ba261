// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[compression]` - Compression policy (target size, longest edge, quality)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_SHRINK_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_shrink::config::{self, Config};
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

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Light or dark theme. Follows the system theme when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<ThemeMode>,
}

/// Compression policy applied to every dropped image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompressionConfig {
    /// Target maximum output size in megabytes.
    #[serde(default = "default_max_size_mb", skip_serializing_if = "Option::is_none")]
    pub max_size_mb: Option<f32>,

    /// Maximum length of the longest image edge, in pixels.
    #[serde(
        default = "default_max_width_or_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_width_or_height: Option<u32>,

    /// Encoder quality used for the first pass (0.0 to 1.0).
    #[serde(
        default = "default_initial_quality",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_quality: Option<f32>,

    /// Run compression on a blocking worker instead of the async executor.
    #[serde(default = "default_use_worker", skip_serializing_if = "Option::is_none")]
    pub use_worker: Option<bool>,

    /// Reach the target size by lowering quality only, never resolution.
    #[serde(
        default = "default_always_keep_resolution",
        skip_serializing_if = "Option::is_none"
    )]
    pub always_keep_resolution: Option<bool>,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            max_size_mb: default_max_size_mb(),
            max_width_or_height: default_max_width_or_height(),
            initial_quality: default_initial_quality(),
            use_worker: default_use_worker(),
            always_keep_resolution: default_always_keep_resolution(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Compression policy.
    #[serde(default)]
    pub compression: CompressionConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_size_mb() -> Option<f32> {
    Some(DEFAULT_MAX_SIZE_MB)
}

fn default_max_width_or_height() -> Option<u32> {
    Some(DEFAULT_MAX_WIDTH_OR_HEIGHT)
}

fn default_initial_quality() -> Option<f32> {
    Some(DEFAULT_INITIAL_QUALITY)
}

fn default_use_worker() -> Option<bool> {
    Some(DEFAULT_USE_WORKER)
}

fn default_always_keep_resolution() -> Option<bool> {
    Some(DEFAULT_ALWAYS_KEEP_RESOLUTION)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with a warning message key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
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
