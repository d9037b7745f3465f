// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`memory_store`]: Volatile settings (implements [`SettingsStore`])
//! - [`simulated_engine`]: Virtual playback clock (implements [`PlaybackEngine`])
//! - [`simulated_device`]: In-memory volume, brightness and wake lock
//!
//! The file-backed settings store lives in [`crate::app::persisted_state`]
//! because it shares path resolution with the config file.
//!
//! [`SettingsStore`]: crate::application::port::SettingsStore
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine

pub mod memory_store;
pub mod simulated_device;
pub mod simulated_engine;

// Re-export main types for convenience
pub use memory_store::MemoryStore;
pub use simulated_device::{SimulatedDevice, SimulatedWakeLock};
pub use simulated_engine::{SimulatedEngine, SimulatedEngineFactory};
