// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core control-surface types.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from timestamps and hashing it has no dependencies on external
//! crates, keeping it trivially testable.
//!
//! # Modules
//!
//! - [`gesture`]: Swipe types ([`GestureMode`](gesture::GestureMode),
//!   [`Adjustment`](gesture::Adjustment), [`Brightness`](gesture::Brightness))
//! - [`media`]: Catalog types ([`MediaItem`](media::MediaItem),
//!   [`MediaLocator`](media::MediaLocator), [`CatalogOrder`](media::CatalogOrder))
//! - [`ui`]: Overlay and lock types ([`LockState`](ui::LockState),
//!   [`OverlayRegion`](ui::OverlayRegion), [`OverlayTimeout`](ui::OverlayTimeout))
//! - [`video`]: Playback types ([`EngineState`](video::EngineState),
//!   [`PlaybackSpeed`](video::PlaybackSpeed), [`SkipDuration`](video::SkipDuration))

pub mod gesture;
pub mod media;
pub mod ui;
pub mod video;
