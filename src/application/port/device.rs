// SPDX-License-Identifier: MPL-2.0
//! Device control port definitions.
//!
//! Stream volume, window brightness and the screen wake lock belong to the
//! host platform. The playback controller drives them through these traits.

use crate::domain::gesture::Brightness;

/// Port for the audio stream volume and window brightness.
pub trait DeviceControls: Send {
    /// Current stream volume step.
    fn stream_volume(&self) -> u32;

    /// Highest stream volume step.
    fn max_stream_volume(&self) -> u32;

    /// Sets the stream volume step.
    fn set_stream_volume(&mut self, level: u32);

    /// Window brightness override, `None` while following the system setting.
    fn window_brightness(&self) -> Option<Brightness>;

    /// Overrides the window brightness.
    fn set_window_brightness(&mut self, brightness: Brightness);
}

/// Port for the keep-screen-awake flag.
///
/// Calls are balanced by [`KeepAwake`](crate::video_player::KeepAwake);
/// implementations do not need to count.
pub trait WakeLock: Send + Sync {
    /// Prevents the display from sleeping.
    fn acquire(&self);

    /// Lets the display sleep again.
    fn release(&self);
}
