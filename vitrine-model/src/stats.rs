/// Aggregate counts over a full catalog.
///
/// Values are produced by a single pass over the catalog and replaced
/// wholesale whenever the catalog changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogStats {
    pub total: usize,
    pub image: usize,
    pub video: usize,
    pub doc: usize,
    pub other: usize,
}

impl CatalogStats {
    /// Documents and uncategorised files share one tile in the gallery header.
    pub fn documents_and_other(&self) -> usize {
        self.doc + self.other
    }
}
