// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related value objects that are independent
//! of any presentation framework.

pub mod lock;
pub mod newtypes;
pub mod overlay;

// Re-export commonly used types
pub use lock::{Interaction, LockIcon, LockState};
pub use newtypes::{OverlayTimeout, ProgressInterval};
pub use overlay::{HideDelay, OverlayRegion, OverlayText};
