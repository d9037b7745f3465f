// SPDX-License-Identifier: MPL-2.0
//! Simulated adapter implementing the [`PlaybackEngine`] port.
//!
//! Plays a fixed library of virtual media: no frames are decoded, the clock
//! only moves when [`SimulatedEngine::advance`] is called. It reports state
//! changes through the subscribed sink exactly like a real engine would,
//! which makes it suitable for the trace player and for tests.
//!
//! # Design Notes
//!
//! - Engines are cheap handles around shared state, so a test can keep a
//!   clone of the engine it handed to the controller and inspect it later
//! - Notifications are sent after the internal lock is released

use crate::application::port::{
    EngineError, EngineFactory, EngineNotification, NotificationSink, PlaybackEngine,
};
use crate::domain::media::MediaLocator;
use crate::domain::video::{EngineState, PlaybackSpeed};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

// =============================================================================
// SimulatedEngine
// =============================================================================

#[derive(Debug, Default)]
struct EngineInner {
    library: HashMap<String, Option<u64>>,
    sink: Option<NotificationSink>,
    loaded: Option<MediaLocator>,
    position_ms: u64,
    duration_ms: Option<u64>,
    playing: bool,
    state: EngineState,
    speed: PlaybackSpeed,
    released: bool,
    seeks: Vec<u64>,
}

impl EngineInner {
    fn sink(&self) -> Option<NotificationSink> {
        self.sink.clone()
    }
}

/// Virtual playback engine.
#[derive(Debug, Clone)]
pub struct SimulatedEngine {
    inner: Arc<Mutex<EngineInner>>,
}

impl SimulatedEngine {
    fn with_library(library: HashMap<String, Option<u64>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(EngineInner {
                library,
                ..EngineInner::default()
            })),
        }
    }

    fn inner(&self) -> MutexGuard<'_, EngineInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn send(sink: Option<NotificationSink>, notifications: &[EngineNotification]) {
        if let Some(sink) = sink {
            for notification in notifications {
                sink.notify(*notification);
            }
        }
    }

    /// Moves the clock forward by `elapsed` of wall time.
    ///
    /// While playing, the position advances at the current speed. Reaching
    /// the end stops playback and reports `Ended`.
    pub fn advance(&self, elapsed: Duration) {
        let (sink, ended) = {
            let mut inner = self.inner();
            if !inner.playing || inner.released {
                return;
            }
            let step = (elapsed.as_millis() as f64 * inner.speed.value()).round() as u64;
            inner.position_ms = inner.position_ms.saturating_add(step);

            let ended = match inner.duration_ms {
                Some(duration) if inner.position_ms >= duration => {
                    inner.position_ms = duration;
                    inner.playing = false;
                    inner.state = EngineState::Ended;
                    true
                }
                _ => false,
            };
            (inner.sink(), ended)
        };

        if ended {
            Self::send(
                sink,
                &[
                    EngineNotification::IsPlayingChanged(false),
                    EngineNotification::StateChanged(EngineState::Ended),
                ],
            );
        }
    }

    /// Whether [`PlaybackEngine::release`] was called.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.inner().released
    }

    /// Whether a sink is currently registered.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.inner().sink.is_some()
    }

    /// Current playback rate.
    #[must_use]
    pub fn speed(&self) -> PlaybackSpeed {
        self.inner().speed
    }

    /// Locator of the loaded media.
    #[must_use]
    pub fn loaded(&self) -> Option<MediaLocator> {
        self.inner().loaded.clone()
    }

    /// Every position passed to `seek_to`, in call order.
    #[must_use]
    pub fn seeks(&self) -> Vec<u64> {
        self.inner().seeks.clone()
    }
}

impl PlaybackEngine for SimulatedEngine {
    fn subscribe(&mut self, sink: NotificationSink) {
        self.inner().sink = Some(sink);
    }

    fn unsubscribe(&mut self) {
        self.inner().sink = None;
    }

    fn load(
        &mut self,
        locator: &MediaLocator,
        start_position_ms: u64,
    ) -> Result<(), EngineError> {
        let sink = {
            let mut inner = self.inner();
            let Some(&duration_ms) = inner.library.get(locator.as_str()) else {
                return Err(EngineError::SourceUnavailable(locator.to_string()));
            };
            inner.loaded = Some(locator.clone());
            inner.duration_ms = duration_ms;
            inner.position_ms = duration_ms.map_or(start_position_ms, |d| start_position_ms.min(d));
            inner.playing = false;
            inner.state = EngineState::Ready;
            inner.sink()
        };
        Self::send(sink, &[EngineNotification::StateChanged(EngineState::Ready)]);
        Ok(())
    }

    fn play(&mut self) {
        let sink = {
            let mut inner = self.inner();
            if inner.playing || inner.state != EngineState::Ready || inner.released {
                return;
            }
            inner.playing = true;
            inner.sink()
        };
        Self::send(sink, &[EngineNotification::IsPlayingChanged(true)]);
    }

    fn pause(&mut self) {
        let sink = {
            let mut inner = self.inner();
            if !inner.playing {
                return;
            }
            inner.playing = false;
            inner.sink()
        };
        Self::send(sink, &[EngineNotification::IsPlayingChanged(false)]);
    }

    fn seek_to(&mut self, position_ms: u64) {
        let (sink, resumed) = {
            let mut inner = self.inner();
            if inner.loaded.is_none() || inner.released {
                return;
            }
            inner.seeks.push(position_ms);
            inner.position_ms = inner
                .duration_ms
                .map_or(position_ms, |d| position_ms.min(d));
            let resumed = inner.state == EngineState::Ended
                && inner.duration_ms.is_none_or(|d| inner.position_ms < d);
            if resumed {
                inner.state = EngineState::Ready;
            }
            (inner.sink(), resumed)
        };
        if resumed {
            Self::send(sink, &[EngineNotification::StateChanged(EngineState::Ready)]);
        }
    }

    fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.inner().speed = speed;
    }

    fn position_ms(&self) -> u64 {
        self.inner().position_ms
    }

    fn duration_ms(&self) -> Option<u64> {
        self.inner().duration_ms
    }

    fn is_playing(&self) -> bool {
        self.inner().playing
    }

    fn state(&self) -> EngineState {
        self.inner().state
    }

    fn release(&mut self) {
        let mut inner = self.inner();
        inner.released = true;
        inner.playing = false;
        inner.state = EngineState::Idle;
        inner.sink = None;
    }
}

// =============================================================================
// SimulatedEngineFactory
// =============================================================================

#[derive(Debug, Default)]
struct FactoryInner {
    library: HashMap<String, Option<u64>>,
    created: Vec<SimulatedEngine>,
}

/// Builds [`SimulatedEngine`]s sharing one media library.
#[derive(Debug, Clone, Default)]
pub struct SimulatedEngineFactory {
    inner: Arc<Mutex<FactoryInner>>,
}

impl SimulatedEngineFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> MutexGuard<'_, FactoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a playable item. `None` simulates a stream of unknown length.
    #[must_use]
    pub fn with_media(self, locator: &str, duration_ms: Option<u64>) -> Self {
        self.inner().library.insert(locator.to_string(), duration_ms);
        self
    }

    /// Number of engines created so far.
    #[must_use]
    pub fn created(&self) -> usize {
        self.inner().created.len()
    }

    /// The most recently created engine.
    #[must_use]
    pub fn latest(&self) -> Option<SimulatedEngine> {
        self.inner().created.last().cloned()
    }
}

impl EngineFactory for SimulatedEngineFactory {
    fn create(&self) -> Box<dyn PlaybackEngine> {
        let mut inner = self.inner();
        let engine = SimulatedEngine::with_library(inner.library.clone());
        inner.created.push(engine.clone());
        Box::new(engine)
    }
}
