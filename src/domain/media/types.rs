// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use chrono::{DateTime, Utc};
use std::fmt;

/// Opaque, stable reference to a playable media item.
///
/// The control surface never interprets a locator; it hands it to the
/// playback engine and uses it as the key for remembered positions.
///
/// # Example
///
/// ```
/// use swipe_deck::domain::media::MediaLocator;
///
/// let locator = MediaLocator::parse("content://media/external/video/42").unwrap();
/// assert_eq!(locator.as_str(), "content://media/external/video/42");
///
/// assert!(MediaLocator::parse("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaLocator(String);

impl MediaLocator {
    /// Parses a locator, returning `None` when it is blank or contains
    /// control characters.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Returns the locator text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a short digest of the locator, stable across runs.
    ///
    /// First 16 hex characters of the BLAKE3 hash of the locator text.
    #[must_use]
    pub fn stable_hash(&self) -> String {
        let digest = blake3::hash(self.0.as_bytes());
        digest.to_hex()[..16].to_string()
    }
}

impl fmt::Display for MediaLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the media catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Catalog identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Duration in milliseconds as reported by the catalog.
    pub duration_ms: u64,
    /// Reference handed to the playback engine.
    pub locator: MediaLocator,
    /// When the item was added to the catalog.
    pub created_at: DateTime<Utc>,
}
