// SPDX-License-Identifier: MPL-2.0
//! Touch gesture domain types.
//!
//! Value objects shared by the gesture classifier and the playback
//! controller. They carry no knowledge of where pointer events come from.

pub mod intent;
pub mod newtypes;

pub use intent::{Adjustment, GestureMode, Tap};
pub use newtypes::{Brightness, SwipeSensitivity, TapTolerance, Viewport, VolumeLevel};
