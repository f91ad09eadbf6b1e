use std::{fmt, path::Path, sync::Arc};

use vitrine_core::{CatalogScanner, DirectoryLister, FsDirectoryLister};

use crate::infra::config::Config;

pub type SharedScanner = CatalogScanner<Arc<dyn DirectoryLister>>;

/// State shared by every request. Nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub scanner: Arc<SharedScanner>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_lister(config, Arc::new(FsDirectoryLister))
    }

    /// Build state around a custom lister, e.g. a fake in tests.
    pub fn with_lister(config: Config, lister: Arc<dyn DirectoryLister>) -> Self {
        let scanner = CatalogScanner::with_lister(
            lister,
            config.media.url_prefix.clone(),
        )
        .with_directory_policy(config.media.directory_policy());

        Self {
            config: Arc::new(config),
            scanner: Arc::new(scanner),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn media_root(&self) -> &Path {
        self.config.media_root()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("media_root", &self.config.media.root)
            .field("url_prefix", &self.config.media.url_prefix)
            .finish_non_exhaustive()
    }
}
