// SPDX-License-Identifier: MPL-2.0
//! This module handles the control surface configuration, including loading
//! and saving tuning values to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[gestures]` - Tap tolerance, swipe sensitivity and seek window
//! - `[overlay]` - Auto-hide delays for controls, indicators and the lock affordance
//! - `[playback]` - Progress polling interval
//!
//! User preferences that the host platform owns (remember position, skip
//! duration) are not stored here; they live in the injected
//! [`SettingsStore`](crate::application::port::SettingsStore).
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SWIPE_DECK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use swipe_deck::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.overlay.controls_timeout_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gesture::{SwipeSensitivity, TapTolerance};
use crate::domain::ui::{OverlayTimeout, ProgressInterval};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Touch gesture tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Radius under which a touch is still a tap.
    #[serde(default = "default_tolerance", skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f32>,

    /// Multiplier for vertical volume/brightness swipes.
    #[serde(
        default = "default_sensitivity",
        skip_serializing_if = "Option::is_none"
    )]
    pub sensitivity: Option<f32>,

    /// Fraction of the media duration a full-width swipe covers.
    #[serde(
        default = "default_seek_window_fraction",
        skip_serializing_if = "Option::is_none"
    )]
    pub seek_window_fraction: Option<f64>,

    /// Smallest seek window for short clips, in milliseconds.
    #[serde(
        default = "default_min_seek_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_seek_window_ms: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            sensitivity: default_sensitivity(),
            seek_window_fraction: default_seek_window_fraction(),
            min_seek_window_ms: default_min_seek_window_ms(),
        }
    }
}

/// Overlay auto-hide delays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Delay before the main controls hide.
    #[serde(
        default = "default_controls_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub controls_timeout_ms: Option<u64>,

    /// Delay before the gesture indicator and transient text hide.
    #[serde(
        default = "default_indicator_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub indicator_timeout_ms: Option<u64>,

    /// Delay before the lock affordance hides while locked.
    #[serde(
        default = "default_lock_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub lock_timeout_ms: Option<u64>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            controls_timeout_ms: default_controls_timeout_ms(),
            indicator_timeout_ms: default_indicator_timeout_ms(),
            lock_timeout_ms: default_lock_timeout_ms(),
        }
    }
}

/// Playback polling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Interval between progress refreshes.
    #[serde(
        default = "default_progress_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_interval_ms: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            progress_interval_ms: default_progress_interval_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Control surface configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Touch gesture tuning.
    #[serde(default)]
    pub gestures: GestureConfig,

    /// Overlay auto-hide delays.
    #[serde(default)]
    pub overlay: OverlayConfig,

    /// Playback polling settings.
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    /// Tap tolerance, clamped into bounds.
    #[must_use]
    pub fn tap_tolerance(&self) -> TapTolerance {
        self.gestures
            .tolerance
            .map_or_else(TapTolerance::default, TapTolerance::new)
    }

    /// Swipe sensitivity, clamped into bounds.
    #[must_use]
    pub fn swipe_sensitivity(&self) -> SwipeSensitivity {
        self.gestures
            .sensitivity
            .map_or_else(SwipeSensitivity::default, SwipeSensitivity::new)
    }

    /// Seek window fraction, clamped into bounds.
    #[must_use]
    pub fn seek_window_fraction(&self) -> f64 {
        match self.gestures.seek_window_fraction {
            Some(value) if value.is_finite() => {
                value.clamp(MIN_SEEK_WINDOW_FRACTION, MAX_SEEK_WINDOW_FRACTION)
            }
            _ => DEFAULT_SEEK_WINDOW_FRACTION,
        }
    }

    /// Minimum seek window in milliseconds.
    #[must_use]
    pub fn min_seek_window_ms(&self) -> u64 {
        self.gestures
            .min_seek_window_ms
            .unwrap_or(DEFAULT_MIN_SEEK_WINDOW_MS)
    }

    /// Controls auto-hide delay.
    #[must_use]
    pub fn controls_timeout(&self) -> OverlayTimeout {
        OverlayTimeout::new(
            self.overlay
                .controls_timeout_ms
                .unwrap_or(DEFAULT_CONTROLS_TIMEOUT_MS),
        )
    }

    /// Gesture indicator and transient text auto-hide delay.
    #[must_use]
    pub fn indicator_timeout(&self) -> OverlayTimeout {
        OverlayTimeout::new(
            self.overlay
                .indicator_timeout_ms
                .unwrap_or(DEFAULT_INDICATOR_TIMEOUT_MS),
        )
    }

    /// Lock affordance auto-hide delay.
    #[must_use]
    pub fn lock_timeout(&self) -> OverlayTimeout {
        OverlayTimeout::new(
            self.overlay
                .lock_timeout_ms
                .unwrap_or(DEFAULT_LOCK_TIMEOUT_MS),
        )
    }

    /// Progress refresh interval.
    #[must_use]
    pub fn progress_interval(&self) -> ProgressInterval {
        ProgressInterval::new(
            self.playback
                .progress_interval_ms
                .unwrap_or(DEFAULT_PROGRESS_INTERVAL_MS),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_tolerance() -> Option<f32> {
    Some(DEFAULT_TAP_TOLERANCE)
}

fn default_sensitivity() -> Option<f32> {
    Some(DEFAULT_SWIPE_SENSITIVITY)
}

fn default_seek_window_fraction() -> Option<f64> {
    Some(DEFAULT_SEEK_WINDOW_FRACTION)
}

fn default_min_seek_window_ms() -> Option<u64> {
    Some(DEFAULT_MIN_SEEK_WINDOW_MS)
}

fn default_controls_timeout_ms() -> Option<u64> {
    Some(DEFAULT_CONTROLS_TIMEOUT_MS)
}

fn default_indicator_timeout_ms() -> Option<u64> {
    Some(DEFAULT_INDICATOR_TIMEOUT_MS)
}

fn default_lock_timeout_ms() -> Option<u64> {
    Some(DEFAULT_LOCK_TIMEOUT_MS)
}

fn default_progress_interval_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_INTERVAL_MS)
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
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "config load failed");
                    return (Config::default(), Some("config-load-error".to_string()));
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
