//! Shared helpers for turning client filter state into a filtered view.
//!
//! A filtered view is the subset of the catalog whose category matches the
//! selector AND whose lowercased name contains the trimmed, lowercased search
//! text. Catalog order is preserved. An empty search matches everything.

use std::fmt;
use std::str::FromStr;

use vitrine_model::{CatalogEntry, MediaCategory, category::UnknownCategory};

/// Category selector driving the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(MediaCategory),
}

impl CategoryFilter {
    /// Selector options in display order.
    pub fn options() -> [CategoryFilter; 5] {
        [
            CategoryFilter::All,
            CategoryFilter::Only(MediaCategory::Image),
            CategoryFilter::Only(MediaCategory::Video),
            CategoryFilter::Only(MediaCategory::Document),
            CategoryFilter::Only(MediaCategory::Other),
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Files",
            CategoryFilter::Only(MediaCategory::Image) => "Images",
            CategoryFilter::Only(MediaCategory::Video) => "Videos",
            CategoryFilter::Only(MediaCategory::Document) => "Documents",
            CategoryFilter::Only(MediaCategory::Other) => "Other",
        }
    }

    pub fn matches(&self, category: MediaCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Client-held (category, search text) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Search text as it is compared: trimmed and lowercased.
    pub fn normalized_search(&self) -> String {
        self.search.trim().to_lowercase()
    }

    /// True when every entry passes.
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.search.trim().is_empty()
    }
}

fn matches_normalized(
    entry: &CatalogEntry,
    category: CategoryFilter,
    needle: &str,
) -> bool {
    category.matches(entry.category)
        && (needle.is_empty() || entry.name.to_lowercase().contains(needle))
}

/// Entries of `catalog` that pass `filter`, in catalog order.
pub fn filter_catalog<'a>(
    catalog: &'a [CatalogEntry],
    filter: &FilterState,
) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
    let category = filter.category;
    let needle = filter.normalized_search();
    catalog
        .iter()
        .filter(move |entry| matches_normalized(entry, category, &needle))
}

/// Positions in `catalog` of the entries that pass `filter`.
pub fn filtered_indices(
    catalog: &[CatalogEntry],
    filter: &FilterState,
) -> Vec<usize> {
    let needle = filter.normalized_search();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches_normalized(entry, filter.category, &needle))
        .map(|(idx, _)| idx)
        .collect()
}
