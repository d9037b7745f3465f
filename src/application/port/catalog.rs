// SPDX-License-Identifier: MPL-2.0
//! Media catalog port definition.
//!
//! The catalog is an external content index. The control surface never
//! touches storage itself; it asks the catalog for the playable items and
//! orders or filters the listing with
//! [`CatalogQuery`](crate::application::query::CatalogQuery).

use crate::domain::media::MediaItem;
use std::fmt;

/// Errors that can occur while listing the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The index refused access (e.g. missing media permission).
    PermissionDenied,
    /// The index could not be queried.
    Unavailable(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::PermissionDenied => write!(f, "Permission denied"),
            CatalogError::Unavailable(msg) => write!(f, "Catalog unavailable: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Port for the external media index.
pub trait MediaCatalog: Send + Sync {
    /// Lists every playable item, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the index cannot be queried.
    fn list(&self) -> Result<Vec<MediaItem>, CatalogError>;
}
