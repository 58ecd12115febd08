// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Startup behavior
//! - `[splash]` - Splash screen and startup sequence
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Use `load_with_override()`/`save_with_override()` with a directory
//! 3. `--config-dir`, then `ICED_LABELER_CONFIG_DIR`, then the platform
//!    config directory (see [`crate::app::paths`])
//!
//! # Examples
//!
//! ```no_run
//! use iced_labeler::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.splash.enabled = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Open the About/Hotkeys screen once startup finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_about_on_start: Option<bool>,
}

/// Splash screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplashConfig {
    /// Whether the splash screen runs at startup.
    #[serde(default = "default_splash_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Number of startup steps.
    #[serde(default = "default_splash_steps", skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,

    /// Pause per step in milliseconds.
    #[serde(
        default = "default_splash_step_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub step_delay_ms: Option<u64>,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: default_splash_enabled(),
            steps: default_splash_steps(),
            step_delay_ms: default_splash_step_delay_ms(),
        }
    }
}

impl SplashConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Step count, clamped to the supported range.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.steps
            .unwrap_or(DEFAULT_SPLASH_STEPS)
            .clamp(MIN_SPLASH_STEPS, MAX_SPLASH_STEPS)
    }

    /// Per-step pause, clamped to the supported range.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        let millis = self
            .step_delay_ms
            .unwrap_or(DEFAULT_SPLASH_STEP_DELAY_MS)
            .min(MAX_SPLASH_STEP_DELAY_MS);
        Duration::from_millis(millis)
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
    pub splash: SplashConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_splash_enabled() -> Option<bool> {
    Some(true)
}

fn default_splash_steps() -> Option<u32> {
    Some(DEFAULT_SPLASH_STEPS)
}

fn default_splash_step_delay_ms() -> Option<u64> {
    Some(DEFAULT_SPLASH_STEP_DELAY_MS)
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
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "failed to load config, using defaults");
                    return (
                        Config::default(),
                        Some(format!(
                            "Could not read {}; default settings are used.\n\n{err}",
                            path.display()
                        )),
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
