// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gestures**: Tap tolerance and swipe sensitivity
//! - **Seek**: Horizontal swipe seek window
//! - **Overlay**: Auto-hide delays for controls, indicators and the lock affordance
//! - **Playback**: Progress polling, skip durations and speed bounds
//! - **Settings keys**: Keys used with the external key-value store

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default radius (in viewport units) under which a touch is still a tap.
pub const DEFAULT_TAP_TOLERANCE: f32 = 20.0;

/// Minimum allowed tap tolerance.
pub const MIN_TAP_TOLERANCE: f32 = 1.0;

/// Maximum allowed tap tolerance.
pub const MAX_TAP_TOLERANCE: f32 = 200.0;

/// Default multiplier applied to vertical swipes (volume and brightness).
pub const DEFAULT_SWIPE_SENSITIVITY: f32 = 2.5;

/// Minimum allowed swipe sensitivity.
pub const MIN_SWIPE_SENSITIVITY: f32 = 0.1;

/// Maximum allowed swipe sensitivity.
pub const MAX_SWIPE_SENSITIVITY: f32 = 10.0;

/// Brightness assumed when the window still follows the system setting.
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Fraction of the media duration covered by a full-width horizontal swipe.
pub const DEFAULT_SEEK_WINDOW_FRACTION: f64 = 0.25;

/// Minimum allowed seek window fraction.
pub const MIN_SEEK_WINDOW_FRACTION: f64 = 0.01;

/// Maximum allowed seek window fraction.
pub const MAX_SEEK_WINDOW_FRACTION: f64 = 1.0;

/// Lower bound of the full-width seek window, so short clips stay scrubbable.
pub const DEFAULT_MIN_SEEK_WINDOW_MS: u64 = 20_000;

// ==========================================================================
// Overlay/Timeout Defaults
// ==========================================================================

/// Default auto-hide delay for the main overlay and control bars (ms).
pub const DEFAULT_CONTROLS_TIMEOUT_MS: u64 = 3_000;

/// Default auto-hide delay for the gesture indicator and transient text (ms).
pub const DEFAULT_INDICATOR_TIMEOUT_MS: u64 = 1_000;

/// Default delay before the lock affordance hides while locked (ms).
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 3_000;

/// Minimum overlay timeout (ms).
pub const MIN_OVERLAY_TIMEOUT_MS: u64 = 250;

/// Maximum overlay timeout (ms).
pub const MAX_OVERLAY_TIMEOUT_MS: u64 = 30_000;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default progress-poll interval (ms).
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 500;

/// Minimum progress-poll interval (ms).
pub const MIN_PROGRESS_INTERVAL_MS: u64 = 50;

/// Maximum progress-poll interval (ms).
pub const MAX_PROGRESS_INTERVAL_MS: u64 = 5_000;

/// Default skip duration for the forward/backward buttons (ms).
pub const DEFAULT_SKIP_DURATION_MS: i64 = 10_000;

/// Skip durations offered by the settings screen (ms).
pub const SKIP_DURATION_PRESETS_MS: &[i64] = &[5_000, 10_000, 15_000];

/// Whether playback positions are remembered when nothing is stored yet.
pub const DEFAULT_REMEMBER_POSITION: bool = true;

// ==========================================================================
// Settings Keys
// ==========================================================================

/// Key of the remember-position toggle.
pub const KEY_REMEMBER_POSITION: &str = "RememberPosition";

/// Key of the skip-duration preference.
pub const KEY_SKIP_DURATION: &str = "SeekTime";

/// Prefix of per-media stored positions.
pub const KEY_LAST_POSITION_PREFIX: &str = "lastPosition_";
