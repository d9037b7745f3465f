// SPDX-License-Identifier: MPL-2.0
//! Catalog query module for browsing the media listing.
//!
//! `CatalogQuery` keeps the last full listing fetched from the
//! [`MediaCatalog`] port and derives the visible list from it: filtered by
//! title, then ordered. Changing the filter or order never refetches.

use crate::application::port::{CatalogError, MediaCatalog};
use crate::domain::media::{CatalogOrder, MediaItem, MediaLocator, TitleFilter};

/// Listing counters for UI rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogInfo {
    /// Number of items in the last fetched listing.
    pub total_count: usize,
    /// Number of items matching the current filter.
    /// Same as `total_count` when no filter is active.
    pub filtered_count: usize,
    /// Whether a filter is currently active.
    pub filter_active: bool,
}

/// Sorted and filtered view over the media catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    /// Full listing, in catalog order.
    items: Vec<MediaItem>,
    order: CatalogOrder,
    filter: TitleFilter,
}

impl CatalogQuery {
    /// Creates an empty query, newest first with no filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the listing with a fresh one from `catalog`.
    ///
    /// On error the previous listing is kept.
    ///
    /// # Errors
    ///
    /// Returns the catalog's error when it cannot be listed.
    pub fn refresh(&mut self, catalog: &dyn MediaCatalog) -> Result<CatalogInfo, CatalogError> {
        match catalog.list() {
            Ok(items) => {
                tracing::debug!(count = items.len(), "catalog refreshed");
                self.items = items;
                Ok(self.info())
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog listing failed");
                Err(err)
            }
        }
    }

    /// Sets the listing order.
    pub fn set_order(&mut self, order: CatalogOrder) {
        self.order = order;
    }

    #[must_use]
    pub fn order(&self) -> CatalogOrder {
        self.order
    }

    /// Sets the title filter from raw search text. Blank text clears it.
    pub fn set_filter(&mut self, query: &str) {
        self.filter = TitleFilter::new(query);
    }

    /// Clears the title filter.
    pub fn clear_filter(&mut self) {
        self.filter = TitleFilter::default();
    }

    #[must_use]
    pub fn filter(&self) -> &TitleFilter {
        &self.filter
    }

    /// Returns the matching items in the current order.
    #[must_use]
    pub fn visible(&self) -> Vec<&MediaItem> {
        let mut visible: Vec<&MediaItem> = self
            .items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect();
        visible.sort_by(|a, b| self.order.compare(a, b));
        visible
    }

    /// Looks up an item of the full listing by catalog id.
    #[must_use]
    pub fn find(&self, id: u64) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up an item of the full listing by locator.
    #[must_use]
    pub fn find_locator(&self, locator: &MediaLocator) -> Option<&MediaItem> {
        self.items.iter().find(|item| &item.locator == locator)
    }

    /// Returns the listing counters.
    #[must_use]
    pub fn info(&self) -> CatalogInfo {
        let filtered_count = if self.filter.is_active() {
            self.items
                .iter()
                .filter(|item| self.filter.matches(item))
                .count()
        } else {
            self.items.len()
        };
        CatalogInfo {
            total_count: self.items.len(),
            filtered_count,
            filter_active: self.filter.is_active(),
        }
    }
}
