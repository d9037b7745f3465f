// SPDX-License-Identifier: MPL-2.0
//! Screen lock state machine
//!
//! ```text
//! Unlocked --enter_lock--> LockedVisible --timeout--> LockedHidden
//!                               ^                          |
//!                               +----------- tap ----------+
//! LockedVisible | LockedHidden --exit_lock--> Unlocked
//! ```
//!
//! A timer only runs in `LockedVisible`. Every entry into that state re-arms it.

use crate::domain::ui::{LockIcon, LockState, OverlayTimeout};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct LockStateMachine {
    state: LockState,
    timeout: OverlayTimeout,
    deadline: Option<Instant>,
}

impl LockStateMachine {
    #[must_use]
    pub fn new(timeout: OverlayTimeout) -> Self {
        Self {
            state: LockState::Unlocked,
            timeout,
            deadline: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> LockState {
        self.state
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// Icon of the lock affordance, `None` while it is hidden.
    #[must_use]
    pub fn icon(&self) -> Option<LockIcon> {
        self.state.icon()
    }

    /// Pending hide deadline of the lock affordance.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Locks the screen. Returns `false` if it was already locked.
    pub fn enter_lock(&mut self, now: Instant) -> bool {
        if self.state != LockState::Unlocked {
            return false;
        }
        self.show_affordance(now);
        true
    }

    /// Unlocks the screen. Returns `false` if it was not locked.
    pub fn exit_lock(&mut self) -> bool {
        if !self.state.is_locked() {
            return false;
        }
        self.state = LockState::Unlocked;
        self.deadline = None;
        tracing::debug!("lock released");
        true
    }

    /// Handles a tap while locked.
    ///
    /// Re-arms the timer and promotes `LockedHidden` back to `LockedVisible`.
    /// Returns `true` if the affordance became visible. Ignored while unlocked.
    pub fn on_tap(&mut self, now: Instant) -> bool {
        match self.state {
            LockState::Unlocked => false,
            LockState::LockedVisible => {
                self.deadline = Some(now + self.timeout.as_duration());
                false
            }
            LockState::LockedHidden => {
                self.show_affordance(now);
                true
            }
        }
    }

    /// Hides the affordance once its deadline has passed.
    /// Returns `true` on the `LockedVisible -> LockedHidden` transition.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now && self.state == LockState::LockedVisible => {
                self.state = LockState::LockedHidden;
                self.deadline = None;
                tracing::debug!("lock affordance hidden");
                true
            }
            _ => false,
        }
    }

    /// Drops the pending timer without changing state (teardown).
    pub fn cancel_timer(&mut self) {
        self.deadline = None;
    }

    fn show_affordance(&mut self, now: Instant) {
        self.state = LockState::LockedVisible;
        self.deadline = Some(now + self.timeout.as_duration());
        tracing::debug!("lock affordance shown");
    }
}

impl Default for LockStateMachine {
    fn default() -> Self {
        Self::new(OverlayTimeout::new(crate::config::DEFAULT_LOCK_TIMEOUT_MS))
    }
}
