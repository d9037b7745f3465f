// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that the host platform implements.
//! These traits use only domain types, ensuring the control surface remains
//! independent of any concrete player, media index or settings backend.
//!
//! # Available Ports
//!
//! - [`catalog`]: Media catalog enumeration
//! - [`device`]: Stream volume, window brightness and screen wake lock
//! - [`engine`]: Playback engine control and its notification channel
//! - [`settings`]: Persistent key-value settings
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Traits are `Send` (and `Sync` when shared) so the control loop can run
//!   on any runtime worker
//! - Methods return `Result` with port-specific error types
//! - No `async fn`: completions are posted back onto the control queue

pub mod catalog;
pub mod device;
pub mod engine;
pub mod settings;

// Re-export main types for convenience
pub use catalog::{CatalogError, MediaCatalog};
pub use device::{DeviceControls, WakeLock};
pub use engine::{
    EngineError, EngineFactory, EngineMessage, EngineNotification, NotificationRouter,
    NotificationSink, PlaybackEngine, SessionId,
};
pub use settings::{SettingValue, SettingsStore, SharedSettings, StoreError};
