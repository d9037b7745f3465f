// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Framework-free state machines behind the control overlay: gesture
//! classification, screen lock and region auto-hide.

pub mod gesture;
pub mod lock;
pub mod visibility;

// Re-export commonly used types for convenience
pub use gesture::{GestureClassifier, GestureSnapshot, GestureTuning};
pub use lock::LockStateMachine;
pub use visibility::VisibilityScheduler;
