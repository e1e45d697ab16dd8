// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[content]` - Content document path and call-to-action target override
//! - `[layout]` - Viewport breakpoint for the side media panel
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `OUTCOME_SHOWCASE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use outcome_showcase::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let breakpoint = config.layout.wide_breakpoint();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
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
}

/// Where the showcase content comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentConfig {
    /// Content document to load instead of the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Replaces the document's call-to-action target for every record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_target: Option<String>,
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Width at and above which media renders in the side panel.
    #[serde(
        default = "default_wide_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub wide_breakpoint: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wide_breakpoint: default_wide_breakpoint(),
        }
    }
}

impl LayoutConfig {
    /// Effective breakpoint, clamped to the supported range.
    #[must_use]
    pub fn wide_breakpoint(&self) -> f32 {
        self.wide_breakpoint
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_WIDE_BREAKPOINT)
            .clamp(MIN_WIDE_BREAKPOINT, MAX_WIDE_BREAKPOINT)
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
    pub content: ContentConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_wide_breakpoint() -> Option<f32> {
    Some(DEFAULT_WIDE_BREAKPOINT)
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default configuration");
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
// Tests
// =============================================================================
