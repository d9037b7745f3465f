// SPDX-License-Identifier: MPL-2.0
//! `swipe_deck` is the gesture-driven control surface of a touch video player.
//!
//! It classifies touch sessions into seek, volume and brightness swipes,
//! auto-hides the overlay controls, arbitrates the screen lock and drives an
//! external playback engine through a narrow port. Decoding and rendering are
//! left to the engine.

#![doc(html_root_url = "https://docs.rs/swipe_deck/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub mod test_utils;
