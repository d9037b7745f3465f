// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by the unit test modules.
//!
//! Float assertions come from the `approx` crate. Swipe targets are computed
//! from `f32` pointer coordinates, so exact comparisons would be brittle.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

/// Tolerance for brightness and other unit-interval values.
pub const UNIT_EPSILON: f32 = 1e-5;
