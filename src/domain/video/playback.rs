// SPDX-License-Identifier: MPL-2.0
//! Playback engine states and the affordances derived from them.

/// Lifecycle state reported by the playback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// Nothing loaded, or loading failed.
    #[default]
    Idle,
    /// Media is prepared and can render frames.
    Ready,
    /// Playback reached the end of the media.
    Ended,
}

/// Point-in-time view of the playback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackSnapshot {
    /// Current position in milliseconds.
    pub position_ms: u64,
    /// Total duration, `None` while unknown.
    pub duration_ms: Option<u64>,
    /// Whether frames are advancing.
    pub is_playing: bool,
    /// Engine lifecycle state.
    pub state: EngineState,
}

impl PlaybackSnapshot {
    /// Returns the duration only when it is known and non-zero.
    #[must_use]
    pub fn known_duration(&self) -> Option<u64> {
        self.duration_ms.filter(|&d| d > 0)
    }
}

/// What the play/pause button currently offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayAffordance {
    /// Paused or stopped: tapping starts playback.
    #[default]
    Play,
    /// Playing: tapping pauses.
    Pause,
    /// Ended: tapping restarts from the beginning.
    Replay,
}

impl PlayAffordance {
    /// Returns the icon asset drawn for this affordance.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            PlayAffordance::Play => "ic_media_play",
            PlayAffordance::Pause => "ic_media_pause",
            PlayAffordance::Replay => "ic_media_replay",
        }
    }
}
