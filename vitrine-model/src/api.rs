//! Request/response payloads for the catalog endpoint.

use crate::entry::CatalogEntry;

/// Successful catalog listing: `{ "files": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogResponse {
    pub files: Vec<CatalogEntry>,
}

/// Failure payload: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
