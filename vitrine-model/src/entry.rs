use crate::category::MediaCategory;

/// One file in the media directory as seen by clients.
///
/// `name` is the literal on-disk filename and the natural key of the entry.
/// `url` is the percent-encoded address under the published prefix and
/// always decodes back to `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub category: MediaCategory,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        category: MediaCategory,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            category,
        }
    }
}

/// Ordered entries for one directory snapshot.
pub type Catalog = Vec<CatalogEntry>;
