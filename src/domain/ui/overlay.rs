// SPDX-License-Identifier: MPL-2.0
//! Overlay regions and the text shown in the transient indicator.

use crate::domain::gesture::{Adjustment, Brightness, VolumeLevel};
use std::fmt;

/// A part of the control overlay that can be shown and auto-hidden on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayRegion {
    /// Scrim and center controls.
    MainOverlay,
    /// Title and lock button row.
    TopBar,
    /// Seek bar and transport buttons.
    BottomBar,
    /// Icon shown while a swipe is adjusting something.
    GestureIndicator,
    /// Short text such as "Volume: 40%".
    TransientText,
}

/// How long a region stays up before auto-hiding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideDelay {
    /// Control regions.
    Long,
    /// Gesture feedback.
    Short,
}

impl OverlayRegion {
    /// Every region, in a stable order.
    pub const ALL: [OverlayRegion; 5] = [
        OverlayRegion::MainOverlay,
        OverlayRegion::TopBar,
        OverlayRegion::BottomBar,
        OverlayRegion::GestureIndicator,
        OverlayRegion::TransientText,
    ];

    /// Regions that together make up the full controls.
    pub const CONTROLS: [OverlayRegion; 3] = [
        OverlayRegion::MainOverlay,
        OverlayRegion::TopBar,
        OverlayRegion::BottomBar,
    ];

    /// Regions that report swipe feedback.
    pub const FEEDBACK: [OverlayRegion; 2] =
        [OverlayRegion::GestureIndicator, OverlayRegion::TransientText];

    /// Returns this region's position in [`OverlayRegion::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            OverlayRegion::MainOverlay => 0,
            OverlayRegion::TopBar => 1,
            OverlayRegion::BottomBar => 2,
            OverlayRegion::GestureIndicator => 3,
            OverlayRegion::TransientText => 4,
        }
    }

    /// Returns the auto-hide class of this region.
    #[must_use]
    pub fn hide_delay(self) -> HideDelay {
        match self {
            OverlayRegion::MainOverlay | OverlayRegion::TopBar | OverlayRegion::BottomBar => {
                HideDelay::Long
            }
            OverlayRegion::GestureIndicator | OverlayRegion::TransientText => HideDelay::Short,
        }
    }
}

/// Feedback text for the transient indicator while a swipe is live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayText {
    /// Seek target.
    Seek {
        /// Target position in milliseconds.
        target_ms: u64,
    },
    /// Stream volume.
    Volume(VolumeLevel),
    /// Window brightness.
    Brightness(Brightness),
    /// Playback rate after a speed change.
    Speed(f64),
}

impl From<Adjustment> for OverlayText {
    fn from(adjustment: Adjustment) -> Self {
        match adjustment {
            Adjustment::Seek { target_ms } => OverlayText::Seek { target_ms },
            Adjustment::Volume(volume) => OverlayText::Volume(volume),
            Adjustment::Brightness(brightness) => OverlayText::Brightness(brightness),
        }
    }
}

impl fmt::Display for OverlayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayText::Seek { target_ms } => write!(f, "Seek: {}s", target_ms / 1000),
            OverlayText::Volume(volume) => write!(f, "Volume: {}%", volume.percent()),
            OverlayText::Brightness(brightness) => {
                write!(f, "Brightness: {}%", brightness.percent())
            }
            OverlayText::Speed(rate) => write!(f, "Speed: {rate}x"),
        }
    }
}
