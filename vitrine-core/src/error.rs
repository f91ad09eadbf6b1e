use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("unable to read media directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl CatalogError {
    pub fn directory_read(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
