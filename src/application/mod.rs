// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The control surface and the playback controller use both through the
//!   port traits only
//!
//! # Example
//!
//! ```ignore
//! use swipe_deck::application::port::{EngineFactory, PlaybackEngine};
//! use swipe_deck::application::query::CatalogQuery;
//!
//! // Infrastructure implements the port trait
//! struct VendorEngine { /* ... */ }
//! impl PlaybackEngine for VendorEngine { /* ... */ }
//!
//! let mut query = CatalogQuery::new();
//! query.refresh(&catalog)?;
//! ```

pub mod port;
pub mod query;
