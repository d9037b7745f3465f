// SPDX-License-Identifier: MPL-2.0
//! Playback control for SwipeDeck.
//!
//! This module drives an external playback engine through the
//! [`PlaybackEngine`](crate::application::port::PlaybackEngine) port and keeps
//! the bookkeeping around it: keep-awake while playing, the periodic seek bar
//! refresh and remembered resume positions.

pub mod controller;
pub mod keep_awake;
pub mod position_store;
pub mod progress;

pub use controller::PlaybackController;
pub use keep_awake::KeepAwake;
pub use position_store::PositionStore;
pub use progress::{ProgressPoller, ProgressUpdate};
