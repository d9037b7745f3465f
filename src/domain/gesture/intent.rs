// SPDX-License-Identifier: MPL-2.0
//! Gesture modes and the intents a touch session produces.

use super::newtypes::{Brightness, VolumeLevel};
use std::fmt;

/// The exclusive adjustment a touch session resolves to.
///
/// A session starts without a mode; it is picked once, when the pointer
/// leaves the tap tolerance radius, and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureMode {
    /// Horizontal swipe: scrub the playback position.
    Seek,
    /// Vertical swipe on the right half: stream volume.
    Volume,
    /// Vertical swipe on the left half: window brightness.
    Brightness,
}

impl fmt::Display for GestureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureMode::Seek => write!(f, "seek"),
            GestureMode::Volume => write!(f, "volume"),
            GestureMode::Brightness => write!(f, "brightness"),
        }
    }
}

/// A live adjustment computed from one pointer-move sample.
///
/// Targets are absolute and measured against the values captured at
/// pointer-down, so applying the latest one is always enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Seek to this position.
    Seek {
        /// Target position in milliseconds, within `[0, duration]`.
        target_ms: u64,
    },
    /// Set the stream volume.
    Volume(VolumeLevel),
    /// Set the window brightness.
    Brightness(Brightness),
}

impl Adjustment {
    /// Returns the mode this adjustment belongs to.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        match self {
            Adjustment::Seek { .. } => GestureMode::Seek,
            Adjustment::Volume(_) => GestureMode::Volume,
            Adjustment::Brightness(_) => GestureMode::Brightness,
        }
    }
}

/// A touch session that never left the tap tolerance radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    /// Pointer-down x coordinate.
    pub x: f32,
    /// Pointer-down y coordinate.
    pub y: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_reports_its_mode() {
        assert_eq!(Adjustment::Seek { target_ms: 0 }.mode(), GestureMode::Seek);
        assert_eq!(
            Adjustment::Volume(VolumeLevel::new(1, 15)).mode(),
            GestureMode::Volume
        );
        assert_eq!(
            Adjustment::Brightness(Brightness::default()).mode(),
            GestureMode::Brightness
        );
    }

    #[test]
    fn mode_display_is_lowercase() {
        assert_eq!(GestureMode::Brightness.to_string(), "brightness");
    }
}
