//! Client-side catalog state.
//!
//! The view owns the fetched catalog and the filter state. Statistics and the
//! filtered subview are derived from those two and recomputed whenever either
//! changes; they are never edited in place.

use vitrine_core::query::{CategoryFilter, FilterState, compute_stats, filtered_indices};
use vitrine_model::{Catalog, CatalogEntry, CatalogStats};

/// Where the single catalog fetch stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    /// Fetched, at least one entry
    Ready,
    /// Fetched, zero entries
    Empty,
    /// Fetch failed; the catalog stays empty
    Failed,
}

/// What the presentation layer should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDisplay {
    Loading,
    Entries,
    /// Catalog has entries but none pass the filter
    NoResults,
    /// Nothing to show at all, after a successful or failed load
    EmptyCatalog,
}

impl ViewDisplay {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ViewDisplay::Loading => Some("Loading media..."),
            ViewDisplay::Entries => None,
            ViewDisplay::NoResults => Some("No matches found"),
            ViewDisplay::EmptyCatalog => Some("No media files yet"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    phase: LoadPhase,
    catalog: Catalog,
    filter: FilterState,
    stats: CatalogStats,
    visible: Vec<usize>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog with a freshly fetched one.
    pub fn apply_loaded(&mut self, catalog: Catalog) {
        self.phase = if catalog.is_empty() {
            LoadPhase::Empty
        } else {
            LoadPhase::Ready
        };
        self.catalog = catalog;
        self.stats = compute_stats(&self.catalog);
        self.refresh_visible();
    }

    pub fn apply_failed(&mut self) {
        self.phase = LoadPhase::Failed;
        self.catalog.clear();
        self.stats = CatalogStats::default();
        self.visible.clear();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
        self.refresh_visible();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.refresh_visible();
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Counts over the whole catalog, independent of the filter.
    pub fn stats(&self) -> CatalogStats {
        self.stats
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.visible.iter().map(|&idx| &self.catalog[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|entry| entry.name == name)
    }

    pub fn display(&self) -> ViewDisplay {
        match self.phase {
            LoadPhase::Loading => ViewDisplay::Loading,
            LoadPhase::Empty | LoadPhase::Failed => ViewDisplay::EmptyCatalog,
            LoadPhase::Ready if self.visible.is_empty() => ViewDisplay::NoResults,
            LoadPhase::Ready => ViewDisplay::Entries,
        }
    }

    fn refresh_visible(&mut self) {
        self.visible = filtered_indices(&self.catalog, &self.filter);
    }
}
