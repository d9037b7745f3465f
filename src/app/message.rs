// SPDX-License-Identifier: MPL-2.0
//! Events consumed by the control surface and the signals it emits.

use crate::application::port::EngineMessage;
use crate::domain::media::MediaLocator;
use crate::domain::ui::{LockIcon, OverlayRegion, OverlayText};
use crate::domain::video::{PlayAffordance, PlaybackSpeed};
use crate::error::ControlError;
use crate::video_player::ProgressUpdate;
use std::fmt;

/// Inputs consumed by `ControlSurface::handle`, one at a time.
///
/// Pointer events, button presses, host lifecycle changes, engine
/// notifications and timer ticks all arrive through this single entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Attach an engine and load this locator (raw, validated on receipt).
    Open(String),
    PointerDown {
        x: f32,
        y: f32,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
    PointerCancel,
    /// The lock button was pressed.
    LockToggled,
    /// The play/pause/replay button was pressed.
    PlayPause,
    SkipForward,
    SkipBackward,
    SpeedSelected(PlaybackSpeed),
    /// The user dragged the seek bar to this position, in seconds.
    SeekBarMoved(u64),
    FullscreenToggled,
    /// The host came to the foreground.
    Activated,
    /// The host went to the background.
    Deactivated,
    Resized {
        width: f32,
        height: f32,
    },
    /// Notification posted by the playback engine.
    Engine(EngineMessage),
    /// A deadline may have passed.
    Tick,
    /// The host is going away: save the position and release everything.
    Close,
}

/// Observable UI changes produced while handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum UiSignal {
    Opened {
        locator: MediaLocator,
        start_ms: u64,
    },
    RegionShown(OverlayRegion),
    RegionHidden(OverlayRegion),
    /// Text for the transient feedback label.
    Feedback(OverlayText),
    /// Lock button icon; `None` hides the button.
    LockIcon(Option<LockIcon>),
    PlayAffordance(PlayAffordance),
    Progress(ProgressUpdate),
    Fullscreen(bool),
    /// An operation failed; the surface stays usable.
    Failed(ControlError),
    /// Teardown finished. Later events are ignored.
    Closed,
}

impl fmt::Display for UiSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiSignal::Opened { locator, start_ms } => {
                write!(f, "opened {locator} at {start_ms} ms")
            }
            UiSignal::RegionShown(region) => write!(f, "show {region:?}"),
            UiSignal::RegionHidden(region) => write!(f, "hide {region:?}"),
            UiSignal::Feedback(text) => write!(f, "feedback \"{text}\""),
            UiSignal::LockIcon(Some(icon)) => write!(f, "lock button {}", icon.asset_name()),
            UiSignal::LockIcon(None) => write!(f, "lock button hidden"),
            UiSignal::PlayAffordance(affordance) => {
                write!(f, "play button {}", affordance.asset_name())
            }
            UiSignal::Progress(update) => {
                write!(f, "progress {}/{} s", update.position_secs, update.max_secs)
            }
            UiSignal::Fullscreen(on) => write!(f, "fullscreen {}", if *on { "on" } else { "off" }),
            UiSignal::Failed(err) => write!(f, "error: {err}"),
            UiSignal::Closed => write!(f, "closed"),
        }
    }
}
