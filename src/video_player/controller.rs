// SPDX-License-Identifier: MPL-2.0
//! Playback controller.
//!
//! Facade between the control surface and the playback engine:
//! - translates intents (play/pause, skip, speed, swipe targets) into engine
//!   and device calls
//! - turns engine notifications into UI state (play affordance, keep-awake)
//! - owns the engine lifecycle (create, subscribe, load, unsubscribe, release)
//!
//! # Sessions
//!
//! Every successful [`PlaybackController::initialize`] opens a new session
//! with a fresh [`SessionId`]. Notifications are stamped with the id of the
//! session that produced them; anything stamped with another id, or arriving
//! after [`PlaybackController::dispose`], is dropped.

use super::keep_awake::KeepAwake;
use super::progress::ProgressUpdate;
use crate::application::port::{
    DeviceControls, EngineFactory, EngineMessage, EngineNotification, NotificationRouter,
    PlaybackEngine, SessionId, WakeLock,
};
use crate::domain::gesture::{Adjustment, Brightness, VolumeLevel};
use crate::domain::media::MediaLocator;
use crate::domain::video::{EngineState, PlayAffordance, PlaybackSnapshot, PlaybackSpeed};
use crate::error::ControlError;
use crate::ui::state::GestureSnapshot;
use std::fmt;
use std::sync::Arc;

struct ActiveSession {
    id: SessionId,
    locator: MediaLocator,
    engine: Box<dyn PlaybackEngine>,
}

/// Drives one playback engine on behalf of the control surface.
pub struct PlaybackController {
    factory: Box<dyn EngineFactory>,
    device: Box<dyn DeviceControls>,
    keep_awake: KeepAwake,
    router: NotificationRouter,
    session: Option<ActiveSession>,
    session_counter: u64,
    speed: PlaybackSpeed,
    affordance: PlayAffordance,
    ended: bool,
    disposed: bool,
}

impl PlaybackController {
    /// Creates a detached controller. No engine exists until `initialize`.
    pub fn new(
        factory: Box<dyn EngineFactory>,
        device: Box<dyn DeviceControls>,
        wake_lock: Arc<dyn WakeLock>,
        router: NotificationRouter,
    ) -> Self {
        Self {
            factory,
            device,
            keep_awake: KeepAwake::new(wake_lock),
            router,
            session: None,
            session_counter: 0,
            speed: PlaybackSpeed::default(),
            affordance: PlayAffordance::default(),
            ended: false,
            disposed: false,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Creates an engine, subscribes to it and loads `locator` at `start_ms`.
    ///
    /// A session already in progress is closed first.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Disposed`] after [`Self::dispose`], and
    /// [`ControlError::InitializationFailed`] if the engine cannot load the
    /// media (the engine is released before returning).
    pub fn initialize(
        &mut self,
        locator: &MediaLocator,
        start_ms: u64,
    ) -> Result<SessionId, ControlError> {
        if self.disposed {
            return Err(ControlError::Disposed);
        }
        self.close_session();

        self.session_counter += 1;
        let id = SessionId::new(self.session_counter);

        let mut engine = self.factory.create();
        engine.subscribe(self.router.sink(id));
        if let Err(err) = engine.load(locator, start_ms) {
            tracing::warn!(%locator, error = %err, "engine failed to load media");
            engine.unsubscribe();
            engine.release();
            return Err(ControlError::from_engine(&err));
        }
        engine.set_speed(self.speed);

        tracing::info!(%locator, start_ms, session = id.value(), "playback initialized");
        self.session = Some(ActiveSession {
            id,
            locator: locator.clone(),
            engine,
        });
        self.ended = false;
        self.affordance = PlayAffordance::Play;
        Ok(id)
    }

    /// Releases keep-awake, unsubscribes from and releases the engine.
    ///
    /// Idempotent. The controller rejects every later `initialize`.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.close_session();
        self.disposed = true;
        tracing::info!("playback controller disposed");
    }

    fn close_session(&mut self) {
        self.keep_awake.release();
        if let Some(mut session) = self.session.take() {
            session.engine.unsubscribe();
            session.engine.release();
            tracing::debug!(session = session.id.value(), "engine released");
        }
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Locator of the attached media.
    #[must_use]
    pub fn locator(&self) -> Option<&MediaLocator> {
        self.session.as_ref().map(|s| &s.locator)
    }

    /// Id of the current session.
    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    fn engine_mut(&mut self) -> Result<&mut dyn PlaybackEngine, ControlError> {
        if self.disposed {
            return Err(ControlError::Disposed);
        }
        match self.session.as_mut() {
            Some(session) => Ok(session.engine.as_mut()),
            None => Err(ControlError::NotInitialized),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current engine state, with the position reset to 0 once ended.
    #[must_use]
    pub fn snapshot(&self) -> Option<PlaybackSnapshot> {
        let engine = &self.session.as_ref()?.engine;
        Some(PlaybackSnapshot {
            position_ms: if self.ended { 0 } else { engine.position_ms() },
            duration_ms: engine.duration_ms(),
            is_playing: engine.is_playing(),
            state: engine.state(),
        })
    }

    /// Values a new touch session is measured against.
    #[must_use]
    pub fn gesture_snapshot(&self) -> GestureSnapshot {
        let playback = self.snapshot().unwrap_or_default();
        GestureSnapshot {
            volume: VolumeLevel::new(
                self.device.stream_volume(),
                self.device.max_stream_volume(),
            ),
            brightness: self.device.window_brightness().unwrap_or_default(),
            position_ms: playback.position_ms,
            duration_ms: playback.duration_ms,
        }
    }

    /// Seek bar values for the progress refresh.
    #[must_use]
    pub fn poll_progress(&self) -> Option<ProgressUpdate> {
        self.snapshot().as_ref().map(ProgressUpdate::from)
    }

    #[must_use]
    pub fn affordance(&self) -> PlayAffordance {
        self.affordance
    }

    #[must_use]
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    #[must_use]
    pub fn is_keeping_awake(&self) -> bool {
        self.keep_awake.is_held()
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Pauses when playing, plays otherwise. After the end, replays from 0.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NotInitialized`] or [`ControlError::Disposed`]
    /// when no engine is attached.
    pub fn toggle_play_pause(&mut self) -> Result<(), ControlError> {
        let ended = self.ended;
        let engine = self.engine_mut()?;
        if ended {
            engine.seek_to(0);
            engine.play();
        } else if engine.is_playing() {
            engine.pause();
        } else {
            engine.play();
        }
        self.ended = false;
        Ok(())
    }

    /// Jumps by `delta_ms` from the current position.
    ///
    /// The target is clamped to `[0, duration]`; an unknown duration leaves
    /// it unbounded above. A known zero duration makes this a no-op.
    ///
    /// Returns the new play affordance when leaving the ended state.
    ///
    /// # Errors
    ///
    /// Returns an error when no engine is attached.
    pub fn skip(&mut self, delta_ms: i64) -> Result<Option<PlayAffordance>, ControlError> {
        let position = self.snapshot().map_or(0, |s| s.position_ms);
        let engine = self.engine_mut()?;
        let duration = engine.duration_ms();
        if duration == Some(0) {
            return Ok(None);
        }

        let target = i64::try_from(position)
            .unwrap_or(i64::MAX)
            .saturating_add(delta_ms)
            .max(0)
            .unsigned_abs();
        let target = duration.map_or(target, |d| target.min(d));
        engine.seek_to(target);
        Ok(self.after_seek())
    }

    /// Changes the playback rate. Remembered across sessions.
    ///
    /// # Errors
    ///
    /// Returns an error when no engine is attached.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) -> Result<(), ControlError> {
        self.engine_mut()?.set_speed(speed);
        self.speed = speed;
        Ok(())
    }

    /// Seeks to an absolute target, clamped to the known duration.
    ///
    /// Returns the new play affordance when leaving the ended state.
    ///
    /// # Errors
    ///
    /// Returns an error when no engine is attached.
    pub fn apply_seek(
        &mut self,
        target_ms: u64,
    ) -> Result<Option<PlayAffordance>, ControlError> {
        let engine = self.engine_mut()?;
        match engine.duration_ms() {
            Some(0) => return Ok(None),
            Some(duration) => engine.seek_to(target_ms.min(duration)),
            None => engine.seek_to(target_ms),
        }
        Ok(self.after_seek())
    }

    /// Sets the stream volume.
    pub fn apply_volume(&mut self, volume: VolumeLevel) {
        let max = self.device.max_stream_volume();
        self.device.set_stream_volume(volume.level().min(max));
    }

    /// Overrides the window brightness.
    pub fn apply_brightness(&mut self, brightness: Brightness) {
        self.device.set_window_brightness(brightness);
    }

    /// Applies a live swipe target.
    ///
    /// Returns the new play affordance when a seek leaves the ended state.
    ///
    /// # Errors
    ///
    /// Returns an error when a seek is requested with no engine attached.
    pub fn apply(
        &mut self,
        adjustment: Adjustment,
    ) -> Result<Option<PlayAffordance>, ControlError> {
        match adjustment {
            Adjustment::Seek { target_ms } => self.apply_seek(target_ms),
            Adjustment::Volume(volume) => {
                self.apply_volume(volume);
                Ok(None)
            }
            Adjustment::Brightness(brightness) => {
                self.apply_brightness(brightness);
                Ok(None)
            }
        }
    }

    /// Leaving the end turns the replay button back into play.
    fn after_seek(&mut self) -> Option<PlayAffordance> {
        if !self.ended {
            return None;
        }
        self.ended = false;
        self.affordance = PlayAffordance::Play;
        Some(self.affordance)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Applies an engine notification.
    ///
    /// Returns the new play affordance when it changed.
    pub fn handle_notification(&mut self, message: EngineMessage) -> Option<PlayAffordance> {
        if self.disposed || self.session_id() != Some(message.session) {
            tracing::trace!(
                session = message.session.value(),
                "ignoring notification from stale session"
            );
            return None;
        }

        let previous = self.affordance;
        match message.notification {
            EngineNotification::IsPlayingChanged(true) => {
                self.keep_awake.hold();
                self.ended = false;
                self.affordance = PlayAffordance::Pause;
            }
            EngineNotification::IsPlayingChanged(false) => {
                self.keep_awake.release();
                self.affordance = if self.ended {
                    PlayAffordance::Replay
                } else {
                    PlayAffordance::Play
                };
            }
            EngineNotification::StateChanged(EngineState::Ended) => {
                tracing::debug!("playback ended");
                self.ended = true;
                self.keep_awake.release();
                self.affordance = PlayAffordance::Replay;
            }
            EngineNotification::StateChanged(EngineState::Ready | EngineState::Idle) => {}
        }

        (self.affordance != previous).then_some(self.affordance)
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("session", &self.session_id())
            .field("speed", &self.speed)
            .field("affordance", &self.affordance)
            .field("ended", &self.ended)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
