// SPDX-License-Identifier: MPL-2.0
//! Scripted input traces for dry runs against the simulated engine.
//!
//! A trace is a TOML file listing the virtual media library and a timeline of
//! user actions:
//!
//! ```toml
//! linger_ms = 4000
//! viewport = { width = 1080.0, height = 1920.0 }
//!
//! [[media]]
//! locator = "content://media/external/video/42"
//! duration_ms = 120000
//!
//! [[step]]
//! at_ms = 0
//! action = "open"
//! locator = "content://media/external/video/42"
//!
//! [[step]]
//! at_ms = 500
//! action = "down"
//! x = 100.0
//! y = 500.0
//! ```
//!
//! Steps are replayed in `at_ms` order; steps sharing a timestamp keep their
//! file order.

use super::ControlEvent;
use crate::domain::gesture::Viewport;
use crate::domain::video::PlaybackSpeed;
use crate::error::{Error, Result};
use crate::infrastructure::SimulatedEngineFactory;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;

/// Viewport used when the trace does not give one.
pub const DEFAULT_VIEWPORT: (f32, f32) = (1080.0, 1920.0);

/// Longest accepted timeline, one day.
pub const MAX_TIMELINE_MS: u64 = 24 * 60 * 60 * 1000;

/// A playable entry of the simulated library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TraceMedia {
    pub locator: String,
    /// Omit for a stream of unknown length.
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TraceViewport {
    pub width: f32,
    pub height: f32,
}

/// One user action of the trace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum TraceAction {
    Open { locator: String },
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Cancel,
    Lock,
    PlayPause,
    SkipForward,
    SkipBackward,
    Speed { rate: f64 },
    SeekBar { seconds: u64 },
    Fullscreen,
    Activate,
    Deactivate,
    Resize { width: f32, height: f32 },
}

impl TraceAction {
    /// Converts the action to the event the surface consumes.
    #[must_use]
    pub fn to_event(&self) -> ControlEvent {
        match self {
            TraceAction::Open { locator } => ControlEvent::Open(locator.clone()),
            TraceAction::Down { x, y } => ControlEvent::PointerDown { x: *x, y: *y },
            TraceAction::Move { x, y } => ControlEvent::PointerMove { x: *x, y: *y },
            TraceAction::Up => ControlEvent::PointerUp,
            TraceAction::Cancel => ControlEvent::PointerCancel,
            TraceAction::Lock => ControlEvent::LockToggled,
            TraceAction::PlayPause => ControlEvent::PlayPause,
            TraceAction::SkipForward => ControlEvent::SkipForward,
            TraceAction::SkipBackward => ControlEvent::SkipBackward,
            TraceAction::Speed { rate } => {
                ControlEvent::SpeedSelected(PlaybackSpeed::new(*rate))
            }
            TraceAction::SeekBar { seconds } => ControlEvent::SeekBarMoved(*seconds),
            TraceAction::Fullscreen => ControlEvent::FullscreenToggled,
            TraceAction::Activate => ControlEvent::Activated,
            TraceAction::Deactivate => ControlEvent::Deactivated,
            TraceAction::Resize { width, height } => ControlEvent::Resized {
                width: *width,
                height: *height,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TraceStep {
    /// Offset from the start of the replay.
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: TraceAction,
}

/// A parsed trace file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub media: Vec<TraceMedia>,
    #[serde(default, rename = "step")]
    pub steps: Vec<TraceStep>,
    pub viewport: Option<TraceViewport>,
    /// How long to keep running after the last step before closing.
    #[serde(default)]
    pub linger_ms: u64,
}

impl Trace {
    /// Parses a trace from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not a valid trace or its
    /// timeline is longer than [`MAX_TIMELINE_MS`].
    pub fn parse(text: &str) -> Result<Self> {
        let mut trace: Trace = toml::from_str(text)?;
        trace.steps.sort_by_key(|step| step.at_ms);
        match trace.end_ms() {
            Some(end) if end <= MAX_TIMELINE_MS => Ok(trace),
            _ => Err(Error::Config(format!(
                "trace runs past {MAX_TIMELINE_MS} ms (last step plus linger_ms)"
            ))),
        }
    }

    /// Reads and parses a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::Config`] if it is not a valid trace.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("cannot read trace {}: {e}", path.display())))?;
        Self::parse(&text)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let (width, height) = self
            .viewport
            .map_or(DEFAULT_VIEWPORT, |v| (v.width, v.height));
        Viewport::new(width, height)
    }

    /// Builds an engine factory serving the trace's media library.
    #[must_use]
    pub fn engine_factory(&self) -> SimulatedEngineFactory {
        self.media
            .iter()
            .fold(SimulatedEngineFactory::new(), |factory, media| {
                factory.with_media(&media.locator, media.duration_ms)
            })
    }

    /// Posts every step to `events` at its offset, then closes the surface.
    ///
    /// `advance_clock` is called with the time elapsed since the previous
    /// step before each step is sent, so the simulated engine can catch up.
    /// Stops early if the loop has gone away.
    pub async fn replay(
        &self,
        events: mpsc::UnboundedSender<ControlEvent>,
        mut advance_clock: impl FnMut(Duration),
    ) {
        let start = tokio::time::Instant::now();
        let mut elapsed = Duration::ZERO;
        let mut wait_until = |offset_ms: u64| {
            let offset = Duration::from_millis(offset_ms);
            let deadline = start.checked_add(offset)?;
            let step = offset.saturating_sub(elapsed);
            elapsed = elapsed.max(offset);
            Some((deadline, step))
        };

        for step in &self.steps {
            let Some((deadline, delta)) = wait_until(step.at_ms) else {
                tracing::warn!(at_ms = step.at_ms, "step offset out of range, replay stopped");
                let _ = events.send(ControlEvent::Close);
                return;
            };
            tokio::time::sleep_until(deadline).await;
            if !delta.is_zero() {
                advance_clock(delta);
            }
            if events.send(step.action.to_event()).is_err() {
                tracing::debug!("control loop gone, replay stopped");
                return;
            }
        }

        let last = self.steps.last().map_or(0, |step| step.at_ms);
        match wait_until(last.saturating_add(self.linger_ms)) {
            Some((deadline, delta)) => {
                tokio::time::sleep_until(deadline).await;
                if !delta.is_zero() {
                    advance_clock(delta);
                }
            }
            None => tracing::warn!(linger_ms = self.linger_ms, "linger out of range, closing now"),
        }
        let _ = events.send(ControlEvent::Close);
    }

    /// Offset at which the replay closes the surface.
    #[must_use]
    pub fn end_ms(&self) -> Option<u64> {
        let last = self.steps.last().map_or(0, |step| step.at_ms);
        last.checked_add(self.linger_ms)
    }
}
