// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! These services do not modify domain state; they provide read-only views.
//!
//! # Available Services
//!
//! - [`catalog`]: Sorted and filtered media listing (`CatalogQuery`)

pub mod catalog;

// Re-export main types
pub use catalog::{CatalogInfo, CatalogQuery};
