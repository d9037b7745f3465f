// SPDX-License-Identifier: MPL-2.0
//! Presentation state of the player screen.

pub mod state;
