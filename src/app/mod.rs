// SPDX-License-Identifier: MPL-2.0
//! Control surface root state and orchestration.
//!
//! The `ControlSurface` wires together the gesture classifier, the overlay
//! scheduler, the lock state machine and the playback controller, and
//! translates [`ControlEvent`]s into engine calls and [`UiSignal`]s. Every
//! input, including timer expirations and engine notifications, goes through
//! [`ControlSurface::handle`], so the whole surface runs on one logical thread.

pub mod control_loop;
mod message;
pub mod paths;
pub mod persisted_state;
pub mod trace;
mod update;

pub use control_loop::ControlLoop;
pub use message::{ControlEvent, UiSignal};

use crate::application::port::{
    DeviceControls, EngineFactory, NotificationRouter, SharedSettings, WakeLock,
};
use crate::config::{self, Config};
use crate::domain::gesture::Viewport;
use crate::domain::ui::{LockState, OverlayRegion, ProgressInterval};
use crate::domain::video::SkipDuration;
use crate::ui::state::{GestureClassifier, GestureTuning, LockStateMachine, VisibilityScheduler};
use crate::video_player::{PlaybackController, PositionStore, ProgressPoller};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// External collaborators handed to the control surface.
pub struct Collaborators {
    pub engines: Box<dyn EngineFactory>,
    pub device: Box<dyn DeviceControls>,
    pub wake_lock: Arc<dyn WakeLock>,
    pub settings: SharedSettings,
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Single-threaded dispatcher for one player screen.
pub struct ControlSurface {
    classifier: GestureClassifier,
    visibility: VisibilityScheduler,
    lock: LockStateMachine,
    controller: PlaybackController,
    positions: PositionStore,
    settings: SharedSettings,
    progress_interval: ProgressInterval,
    progress: Option<ProgressPoller>,
    fullscreen: bool,
    closed: bool,
}

impl fmt::Debug for ControlSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlSurface")
            .field("lock", &self.lock.state())
            .field("controller", &self.controller)
            .field("fullscreen", &self.fullscreen)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl ControlSurface {
    /// Builds a surface from the loaded config.
    ///
    /// Engine notifications are delivered through `router`; the owner must
    /// feed them back as [`ControlEvent::Engine`].
    pub fn new(
        config: &Config,
        collaborators: Collaborators,
        router: NotificationRouter,
        viewport: Viewport,
    ) -> Self {
        let Collaborators {
            engines,
            device,
            wake_lock,
            settings,
        } = collaborators;

        Self {
            classifier: GestureClassifier::new(GestureTuning::from_config(config), viewport),
            visibility: VisibilityScheduler::new(
                config.controls_timeout(),
                config.indicator_timeout(),
            ),
            lock: LockStateMachine::new(config.lock_timeout()),
            controller: PlaybackController::new(engines, device, wake_lock, router),
            positions: PositionStore::new(Arc::clone(&settings)),
            settings,
            progress_interval: config.progress_interval(),
            progress: None,
            fullscreen: false,
            closed: false,
        }
    }

    /// Handles one event and returns the resulting UI changes.
    pub fn handle(&mut self, event: ControlEvent, now: Instant) -> Vec<UiSignal> {
        if self.closed {
            tracing::trace!(?event, "surface closed, event ignored");
            return Vec::new();
        }
        let mut signals = Vec::new();
        update::dispatch(self, event, now, &mut signals);
        signals
    }

    /// Earliest pending deadline across overlay, lock and progress timers.
    ///
    /// The owner sends [`ControlEvent::Tick`] once it is reached.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.visibility.next_deadline(),
            self.lock.next_deadline(),
            self.progress.as_ref().and_then(ProgressPoller::next_deadline),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.lock.state()
    }

    #[must_use]
    pub fn is_visible(&self, region: OverlayRegion) -> bool {
        self.visibility.is_visible(region)
    }

    #[must_use]
    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether teardown already ran.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Skip button distance from the `SeekTime` setting.
    #[must_use]
    pub fn skip_duration(&self) -> SkipDuration {
        let default = i32::try_from(config::DEFAULT_SKIP_DURATION_MS).unwrap_or(i32::MAX);
        match self.settings.get_int(config::KEY_SKIP_DURATION, default) {
            Ok(ms) => SkipDuration::from_millis(i64::from(ms)),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read skip duration");
                SkipDuration::default()
            }
        }
    }
}
