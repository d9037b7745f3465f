// SPDX-License-Identifier: MPL-2.0
//! Playback engine port definition.
//!
//! This module defines the [`PlaybackEngine`] trait for the external
//! decode/render pipeline, and the notification channel it reports back on.
//!
//! # Design Notes
//!
//! - The engine owns decoding, rendering and audio; the control surface only
//!   drives it through this minimal contract
//! - The engine may run its own threads, but it talks back exclusively through
//!   a [`NotificationSink`], which delivers onto the control surface's queue
//! - Every sink is stamped with a [`SessionId`] so notifications from an
//!   engine that has since been disposed can be recognised and dropped

use crate::domain::media::MediaLocator;
use crate::domain::video::{EngineState, PlaybackSpeed};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// EngineError
// =============================================================================

/// Errors reported by a playback engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The locator does not resolve to playable media.
    SourceUnavailable(String),
    /// The media was found but cannot be decoded.
    Unsupported(String),
    /// Any other engine failure.
    Other(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SourceUnavailable(msg) => write!(f, "Source unavailable: {msg}"),
            EngineError::Unsupported(msg) => write!(f, "Unsupported media: {msg}"),
            EngineError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

// =============================================================================
// Notifications
// =============================================================================

/// Identifies one attach of the controller to an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Creates a session id from a raw counter value.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// State change pushed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineNotification {
    /// Frames started or stopped advancing.
    IsPlayingChanged(bool),
    /// The engine moved to a new lifecycle state.
    StateChanged(EngineState),
}

/// A notification tagged with the session it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineMessage {
    /// Session of the engine that sent it.
    pub session: SessionId,
    /// What happened.
    pub notification: EngineNotification,
}

type Deliver = Arc<dyn Fn(EngineMessage) + Send + Sync>;

/// Routes engine messages onto the control surface's dispatch queue.
///
/// The controller holds one router and derives a [`NotificationSink`] per
/// session from it.
#[derive(Clone)]
pub struct NotificationRouter {
    deliver: Deliver,
}

impl NotificationRouter {
    /// Creates a router from the function that enqueues a message.
    pub fn new(deliver: impl Fn(EngineMessage) + Send + Sync + 'static) -> Self {
        Self {
            deliver: Arc::new(deliver),
        }
    }

    /// A router that drops every message.
    #[must_use]
    pub fn discard() -> Self {
        Self::new(|_| {})
    }

    /// Returns a sink stamping messages with `session`.
    #[must_use]
    pub fn sink(&self, session: SessionId) -> NotificationSink {
        NotificationSink {
            session,
            deliver: Arc::clone(&self.deliver),
        }
    }
}

impl fmt::Debug for NotificationRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRouter").finish_non_exhaustive()
    }
}

/// Handle an engine uses to report state changes. Cheap to clone.
#[derive(Clone)]
pub struct NotificationSink {
    session: SessionId,
    deliver: Deliver,
}

impl NotificationSink {
    /// Delivers a notification for this sink's session.
    pub fn notify(&self, notification: EngineNotification) {
        (self.deliver)(EngineMessage {
            session: self.session,
            notification,
        });
    }

    /// Returns the session this sink reports for.
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }
}

impl fmt::Debug for NotificationSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationSink")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// PlaybackEngine Trait
// =============================================================================

/// Port for the external playback engine.
///
/// # Lifecycle
///
/// 1. Create via [`EngineFactory::create`]
/// 2. `subscribe()` once with the session's sink
/// 3. `load()` the media at a start position, then drive it
/// 4. `unsubscribe()` and `release()` on teardown
pub trait PlaybackEngine: Send {
    /// Registers the sink notifications are delivered to.
    fn subscribe(&mut self, sink: NotificationSink);

    /// Drops the registered sink. No notification may be sent afterwards.
    fn unsubscribe(&mut self);

    /// Prepares `locator` for playback starting at `start_position_ms`.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the media cannot be opened.
    fn load(&mut self, locator: &MediaLocator, start_position_ms: u64)
        -> Result<(), EngineError>;

    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback.
    fn pause(&mut self);

    /// Jumps to `position_ms`.
    fn seek_to(&mut self, position_ms: u64);

    /// Changes the playback rate.
    fn set_speed(&mut self, speed: PlaybackSpeed);

    /// Current position in milliseconds.
    fn position_ms(&self) -> u64;

    /// Total duration, `None` while unknown.
    fn duration_ms(&self) -> Option<u64>;

    /// Whether frames are advancing.
    fn is_playing(&self) -> bool;

    /// Current lifecycle state.
    fn state(&self) -> EngineState;

    /// Frees decoder resources. The engine is unusable afterwards.
    fn release(&mut self);
}

/// Creates playback engines on demand.
pub trait EngineFactory: Send {
    /// Builds a fresh, unloaded engine.
    fn create(&self) -> Box<dyn PlaybackEngine>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn PlaybackEngine) {}

    #[test]
    fn sink_stamps_session() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);
        let router = NotificationRouter::new(move |msg| log.lock().unwrap().push(msg));

        let sink = router.sink(SessionId::new(7));
        sink.notify(EngineNotification::IsPlayingChanged(true));
        sink.notify(EngineNotification::StateChanged(EngineState::Ended));

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 2);
        assert!(received.iter().all(|m| m.session == SessionId::new(7)));
        assert_eq!(
            received[1].notification,
            EngineNotification::StateChanged(EngineState::Ended)
        );
    }

    #[test]
    fn engine_error_display() {
        let err = EngineError::SourceUnavailable("gone".into());
        assert_eq!(err.to_string(), "Source unavailable: gone");
    }
}
