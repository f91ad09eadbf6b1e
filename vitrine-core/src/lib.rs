//! # Vitrine Core
//!
//! Core library for the Vitrine media catalog: everything between a flat
//! directory on disk and the ordered, classified listing that clients render.
//!
//! ## Overview
//!
//! - [`classifier`]: extension-based mapping from a filename to a [`MediaCategory`]
//! - [`address`]: percent-encoded addresses under the published prefix
//! - [`scanner`]: one-shot directory scans producing a naturally ordered catalog
//! - [`query`]: filter/search and statistics derivations shared by clients
//! - [`api_routes`]: route constants shared between server and clients
//!
//! ## Examples
//!
//! ```no_run
//! use vitrine_core::{
//!     CatalogScanner, MediaCategory,
//!     query::{CategoryFilter, FilterState, filter_catalog},
//! };
//!
//! fn videos_named_trailer() -> Result<(), vitrine_core::CatalogError> {
//!     let scanner = CatalogScanner::new("/Media");
//!     let catalog = scanner.scan("public/Media")?;
//!     let filter = FilterState::new(CategoryFilter::Only(MediaCategory::Video), "trailer");
//!     for entry in filter_catalog(&catalog, &filter) {
//!         println!("{} -> {}", entry.name, entry.url);
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Common API routes used across Vitrine services
pub mod api_routes;

pub mod address;
pub mod classifier;
pub mod error;
pub mod query;
pub mod scanner;

pub use address::{absolute_link, decode_address, encode_address};
pub use classifier::{classify, extension_of};
pub use error::{CatalogError, Result};
pub use scanner::{
    CatalogScanner, DirectoryLister, DirectoryPolicy, FsDirectoryLister,
    ListedEntry,
};

pub use vitrine_model::{
    Catalog, CatalogEntry, CatalogResponse, CatalogStats, ErrorResponse,
    MediaCategory,
};
