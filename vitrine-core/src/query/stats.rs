use vitrine_model::{CatalogEntry, CatalogStats, MediaCategory};

/// Count entries per category in a single pass.
pub fn compute_stats(catalog: &[CatalogEntry]) -> CatalogStats {
    catalog.iter().fold(
        CatalogStats {
            total: catalog.len(),
            ..CatalogStats::default()
        },
        |mut stats, entry| {
            match entry.category {
                MediaCategory::Image => stats.image += 1,
                MediaCategory::Video => stats.video += 1,
                MediaCategory::Document => stats.doc += 1,
                MediaCategory::Other => stats.other += 1,
            }
            stats
        },
    )
}
