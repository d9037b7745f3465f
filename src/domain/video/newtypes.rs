// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Playback speed bounds (0.25x to 4.0x).
pub mod speed_bounds {
    /// Minimum playback speed.
    pub const MIN: f64 = 0.25;
    /// Maximum playback speed.
    pub const MAX: f64 = 4.0;
    /// Default playback speed (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
}

/// Playback speed value, guaranteed to be within valid range (0.25x - 4.0x).
///
/// This newtype enforces validity at the type level, making it impossible
/// to hand an invalid rate to the playback engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Creates a new playback speed, clamping to valid range.
    ///
    /// Non-finite rates fall back to normal speed.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        if !speed.is_finite() {
            return Self::default();
        }
        Self(speed.clamp(speed_bounds::MIN, speed_bounds::MAX))
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(speed_bounds::DEFAULT)
    }
}

// =============================================================================
// SkipDuration
// =============================================================================

/// Distance jumped by the skip-forward / skip-backward buttons.
///
/// Only the settings presets (5 s, 10 s, 15 s) are valid; anything else
/// falls back to the default of 10 s, matching how the preference is
/// presented as a radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipDuration(i64);

impl SkipDuration {
    /// Creates a skip duration from a stored millisecond value.
    #[must_use]
    pub fn from_millis(ms: i64) -> Self {
        use crate::config::{DEFAULT_SKIP_DURATION_MS, SKIP_DURATION_PRESETS_MS};
        if SKIP_DURATION_PRESETS_MS.contains(&ms) {
            Self(ms)
        } else {
            Self(DEFAULT_SKIP_DURATION_MS)
        }
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> i64 {
        self.0
    }
}

impl Default for SkipDuration {
    fn default() -> Self {
        Self(crate::config::DEFAULT_SKIP_DURATION_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
