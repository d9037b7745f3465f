// SPDX-License-Identifier: MPL-2.0
//! Balanced ownership of the screen wake lock.

use crate::application::port::WakeLock;
use std::fmt;
use std::sync::Arc;

/// Holds the platform wake lock at most once and releases it on drop.
pub struct KeepAwake {
    lock: Arc<dyn WakeLock>,
    held: bool,
}

impl KeepAwake {
    #[must_use]
    pub fn new(lock: Arc<dyn WakeLock>) -> Self {
        Self { lock, held: false }
    }

    /// Acquires the lock unless already held.
    pub fn hold(&mut self) {
        if !self.held {
            self.lock.acquire();
            self.held = true;
        }
    }

    /// Releases the lock if held.
    pub fn release(&mut self) {
        if self.held {
            self.lock.release();
            self.held = false;
        }
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Drop for KeepAwake {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for KeepAwake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeepAwake")
            .field("held", &self.held)
            .finish_non_exhaustive()
    }
}
