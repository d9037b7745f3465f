// SPDX-License-Identifier: MPL-2.0
//! Simulated adapters for the [`DeviceControls`] and [`WakeLock`] ports.

use crate::application::port::{DeviceControls, WakeLock};
use crate::domain::gesture::Brightness;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
struct DeviceInner {
    volume: AtomicU32,
    max_volume: u32,
    brightness: Mutex<Option<Brightness>>,
}

/// Device volume and window brightness kept in memory.
///
/// Clones share state, so a test can observe what the controller applied.
#[derive(Debug, Clone)]
pub struct SimulatedDevice {
    inner: Arc<DeviceInner>,
}

impl SimulatedDevice {
    /// Creates a device at `volume` out of `max_volume`, brightness following the system.
    #[must_use]
    pub fn new(volume: u32, max_volume: u32) -> Self {
        Self {
            inner: Arc::new(DeviceInner {
                volume: AtomicU32::new(volume.min(max_volume)),
                max_volume,
                brightness: Mutex::new(None),
            }),
        }
    }
}

impl Default for SimulatedDevice {
    fn default() -> Self {
        Self::new(7, 15)
    }
}

impl DeviceControls for SimulatedDevice {
    fn stream_volume(&self) -> u32 {
        self.inner.volume.load(Ordering::SeqCst)
    }

    fn max_stream_volume(&self) -> u32 {
        self.inner.max_volume
    }

    fn set_stream_volume(&mut self, level: u32) {
        self.inner
            .volume
            .store(level.min(self.inner.max_volume), Ordering::SeqCst);
    }

    fn window_brightness(&self) -> Option<Brightness> {
        *self
            .inner
            .brightness
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn set_window_brightness(&mut self, brightness: Brightness) {
        *self
            .inner
            .brightness
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(brightness);
    }
}

/// Wake lock that only records whether it is held.
#[derive(Debug, Default)]
pub struct SimulatedWakeLock {
    held: AtomicBool,
}

impl SimulatedWakeLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }
}

impl WakeLock for SimulatedWakeLock {
    fn acquire(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
    }
}
