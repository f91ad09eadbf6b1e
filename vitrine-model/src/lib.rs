//! Core data model definitions shared across Vitrine crates.
#![allow(missing_docs)]

pub mod api;
pub mod category;
pub mod entry;
pub mod stats;

// Intentionally curated re-exports for downstream consumers.
pub use api::{CatalogResponse, ErrorResponse};
pub use category::MediaCategory;
pub use entry::{Catalog, CatalogEntry};
pub use stats::CatalogStats;
