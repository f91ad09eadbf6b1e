//! Derivations clients compute from a catalog.
//!
//! Both derivations take the full catalog as input and never mutate it:
//! statistics always describe everything, the filtered view describes what
//! the current [`FilterState`] lets through.

pub mod filtering;
pub mod stats;

pub use filtering::{
    CategoryFilter, FilterState, filter_catalog, filtered_indices,
};
pub use stats::compute_stats;
