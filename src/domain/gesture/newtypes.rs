// SPDX-License-Identifier: MPL-2.0
//! Gesture newtypes.
//!
//! This module provides type-safe wrappers for the values a swipe gesture
//! reads and produces, ensuring they are always within valid ranges.

// =============================================================================
// Brightness
// =============================================================================

/// Brightness bounds (0.0 = darkest, 1.0 = brightest).
pub mod brightness_bounds {
    /// Minimum brightness.
    pub const MIN: f32 = 0.0;
    /// Maximum brightness.
    pub const MAX: f32 = 1.0;
    /// Brightness assumed when the window follows the system setting.
    pub const DEFAULT: f32 = 0.5;
}

/// Window brightness, guaranteed to be within `[0.0, 1.0]`.
///
/// # Example
///
/// ```
/// use swipe_deck::domain::gesture::Brightness;
///
/// assert_eq!(Brightness::new(0.4).value(), 0.4);
/// assert_eq!(Brightness::new(3.0).value(), 1.0);
/// assert_eq!(Brightness::new(f32::NAN).value(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brightness(f32);

impl Brightness {
    /// Creates a brightness level, clamping to valid range.
    ///
    /// `NaN` falls back to the default level.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(brightness_bounds::MIN, brightness_bounds::MAX))
    }

    /// Returns the brightness value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the brightness as a whole percentage (0–100).
    #[must_use]
    pub fn percent(self) -> u32 {
        (self.0 * 100.0) as u32
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(brightness_bounds::DEFAULT)
    }
}

// =============================================================================
// VolumeLevel
// =============================================================================

/// Stream volume as a discrete step out of the device maximum.
///
/// Device volume is not continuous: audio stacks expose an integer index
/// between zero and a stream-specific maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeLevel {
    level: u32,
    max: u32,
}

impl VolumeLevel {
    /// Creates a volume level, clamping `level` to `[0, max]`.
    #[must_use]
    pub fn new(level: u32, max: u32) -> Self {
        Self {
            level: level.min(max),
            max,
        }
    }

    /// Returns the volume step.
    #[must_use]
    pub fn level(self) -> u32 {
        self.level
    }

    /// Returns the device maximum.
    #[must_use]
    pub fn max(self) -> u32 {
        self.max
    }

    /// Returns the volume as a whole percentage (0–100).
    #[must_use]
    pub fn percent(self) -> u32 {
        if self.max == 0 {
            return 0;
        }
        self.level * 100 / self.max
    }
}

// =============================================================================
// TapTolerance
// =============================================================================

/// Radius, in viewport units, a touch may wander and still count as a tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapTolerance(f32);

impl TapTolerance {
    /// Creates a tolerance, clamping to valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        use crate::config::{DEFAULT_TAP_TOLERANCE, MAX_TAP_TOLERANCE, MIN_TAP_TOLERANCE};
        if value.is_nan() {
            return Self(DEFAULT_TAP_TOLERANCE);
        }
        Self(value.clamp(MIN_TAP_TOLERANCE, MAX_TAP_TOLERANCE))
    }

    /// Returns the tolerance radius.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for TapTolerance {
    fn default() -> Self {
        Self(crate::config::DEFAULT_TAP_TOLERANCE)
    }
}

// =============================================================================
// SwipeSensitivity
// =============================================================================

/// Multiplier turning a vertical swipe fraction into a volume/brightness delta.
///
/// At the default of 2.5, a swipe over 40% of the viewport height sweeps
/// the whole range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSensitivity(f32);

impl SwipeSensitivity {
    /// Creates a sensitivity, clamping to valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        use crate::config::{
            DEFAULT_SWIPE_SENSITIVITY, MAX_SWIPE_SENSITIVITY, MIN_SWIPE_SENSITIVITY,
        };
        if value.is_nan() {
            return Self(DEFAULT_SWIPE_SENSITIVITY);
        }
        Self(value.clamp(MIN_SWIPE_SENSITIVITY, MAX_SWIPE_SENSITIVITY))
    }

    /// Returns the multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeSensitivity {
    fn default() -> Self {
        Self(crate::config::DEFAULT_SWIPE_SENSITIVITY)
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// Size of the touch surface the gestures are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width in viewport units.
    pub width: f32,
    /// Height in viewport units.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport. Negative or `NaN` dimensions become zero.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
        }
    }

    /// Horizontal midpoint splitting the brightness and volume halves.
    #[must_use]
    pub fn mid_x(self) -> f32 {
        self.width / 2.0
    }

    /// Fraction of the width covered by `dx`, or `None` for a zero-width viewport.
    #[must_use]
    pub fn width_fraction(self, dx: f32) -> Option<f32> {
        (self.width > 0.0).then(|| dx / self.width)
    }

    /// Fraction of the height covered by `dy`, or `None` for a zero-height viewport.
    #[must_use]
    pub fn height_fraction(self, dy: f32) -> Option<f32> {
        (self.height > 0.0).then(|| dy / self.height)
    }
}

fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
