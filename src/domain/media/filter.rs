// SPDX-License-Identifier: MPL-2.0
//! Catalog ordering and filtering types for the domain layer.
//!
//! This module contains pure sort and filter types without I/O operations.
//!
//! # Available Types
//!
//! - [`TitleFilter`]: Case-insensitive substring match on the title
//! - [`SortKey`] / [`SortDirection`] / [`CatalogOrder`]: Listing order

use super::MediaItem;
use std::cmp::Ordering;

// =============================================================================
// Title Filter
// =============================================================================

/// Case-insensitive title substring filter.
///
/// A blank query is inactive and matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleFilter {
    /// Lowercased query, `None` when inactive.
    needle: Option<String>,
}

impl TitleFilter {
    /// Creates a filter from raw search text.
    #[must_use]
    pub fn new(query: &str) -> Self {
        let trimmed = query.trim();
        Self {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    /// Returns `true` if this filter is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    /// Returns `true` if `item`'s title contains the query.
    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        match &self.needle {
            Some(needle) => item.title.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Field the catalog listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// When the item was added.
    #[default]
    CreatedAt,
    /// Title, ignoring case.
    Title,
}

/// Ascending or descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}

/// Sort key plus direction. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogOrder {
    /// Field to sort by.
    pub key: SortKey,
    /// Direction to sort in.
    pub direction: SortDirection,
}

impl CatalogOrder {
    /// Creates an order.
    #[must_use]
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Compares two items under this order.
    ///
    /// Ties fall back to the catalog id so the order is total.
    #[must_use]
    pub fn compare(&self, a: &MediaItem, b: &MediaItem) -> Ordering {
        let primary = match self.key {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        };
        let ordering = primary.then_with(|| a.id.cmp(&b.id));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}
