// SPDX-License-Identifier: MPL-2.0
//! Recurring seek bar refresh.
//!
//! The poller does not run anything by itself: it only tracks when the next
//! refresh is due. It is suspended while the surface is in the background
//! and canceled for good on teardown.

use crate::domain::ui::ProgressInterval;
use crate::domain::video::PlaybackSnapshot;
use std::time::Instant;

/// Seek bar values, in whole seconds like the bar itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressUpdate {
    /// Thumb position.
    pub position_secs: u64,
    /// Bar maximum, 0 while the duration is unknown.
    pub max_secs: u64,
}

impl From<&PlaybackSnapshot> for ProgressUpdate {
    fn from(snapshot: &PlaybackSnapshot) -> Self {
        Self {
            position_secs: snapshot.position_ms / 1000,
            max_secs: snapshot.duration_ms.unwrap_or(0) / 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollState {
    Running { next_due: Instant },
    Suspended,
    Canceled,
}

/// Schedule of the progress refresh.
#[derive(Debug, Clone)]
pub struct ProgressPoller {
    interval: ProgressInterval,
    state: PollState,
}

impl ProgressPoller {
    /// Creates a running poller whose first refresh is due at `now`.
    #[must_use]
    pub fn new(interval: ProgressInterval, now: Instant) -> Self {
        Self {
            interval,
            state: PollState::Running { next_due: now },
        }
    }

    /// When the next refresh is due, `None` while suspended or canceled.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            PollState::Running { next_due } => Some(next_due),
            PollState::Suspended | PollState::Canceled => None,
        }
    }

    /// Returns `true` and schedules the following refresh if one is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            PollState::Running { next_due } if next_due <= now => {
                self.state = PollState::Running {
                    next_due: now + self.interval.as_duration(),
                };
                true
            }
            _ => false,
        }
    }

    /// Stops refreshing until [`Self::resume`].
    pub fn suspend(&mut self) {
        if self.state != PollState::Canceled {
            self.state = PollState::Suspended;
        }
    }

    /// Restarts a suspended poller with an immediate refresh.
    pub fn resume(&mut self, now: Instant) {
        if self.state == PollState::Suspended {
            self.state = PollState::Running { next_due: now };
        }
    }

    /// Stops refreshing for good.
    pub fn cancel(&mut self) {
        self.state = PollState::Canceled;
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.state == PollState::Canceled
    }
}
