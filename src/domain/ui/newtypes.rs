// SPDX-License-Identifier: MPL-2.0
//! UI timing newtypes.
//!
//! This module provides type-safe wrappers for the delays driving the
//! auto-hiding overlay, ensuring they are always within valid ranges.

use crate::config::{
    MAX_OVERLAY_TIMEOUT_MS, MAX_PROGRESS_INTERVAL_MS, MIN_OVERLAY_TIMEOUT_MS,
    MIN_PROGRESS_INTERVAL_MS,
};
use std::time::Duration;

// =============================================================================
// OverlayTimeout
// =============================================================================

/// Auto-hide delay in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (250 ms to 30 s).
///
/// # Example
///
/// ```
/// use swipe_deck::domain::ui::OverlayTimeout;
///
/// let timeout = OverlayTimeout::new(3_000);
/// assert_eq!(timeout.value(), 3_000);
///
/// // Values outside range are clamped
/// assert_eq!(OverlayTimeout::new(100_000).value(), 30_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTimeout(u64);

impl OverlayTimeout {
    /// Creates a new overlay timeout value, clamping to valid range.
    #[must_use]
    pub fn new(value_ms: u64) -> Self {
        Self(value_ms.clamp(MIN_OVERLAY_TIMEOUT_MS, MAX_OVERLAY_TIMEOUT_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for OverlayTimeout {
    fn default() -> Self {
        Self(crate::config::DEFAULT_CONTROLS_TIMEOUT_MS)
    }
}

// =============================================================================
// ProgressInterval
// =============================================================================

/// Period of the progress poll refreshing the seek bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressInterval(u64);

impl ProgressInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(value_ms: u64) -> Self {
        Self(value_ms.clamp(MIN_PROGRESS_INTERVAL_MS, MAX_PROGRESS_INTERVAL_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ProgressInterval {
    fn default() -> Self {
        Self(crate::config::DEFAULT_PROGRESS_INTERVAL_MS)
    }
}
