//! One-shot scans of the media directory.
//!
//! A scan is a pure function of the directory contents: nothing is cached
//! between calls, and every call lists the directory again. Either the whole
//! directory is listed and a complete catalog is returned, or the scan fails.

mod lister;
pub mod ordering;

use std::path::Path;

use tracing::{debug, info, warn};
use vitrine_model::{CatalogEntry, MediaCategory};

use crate::address::encode_address;
use crate::api_routes::DEFAULT_MEDIA_PREFIX;
use crate::classifier::classify;
use crate::error::{CatalogError, Result};

pub use lister::{DirectoryLister, FsDirectoryLister, ListedEntry};

/// What to do with subdirectories found in the media directory.
///
/// Subdirectories are not recursed into either way. When included they are
/// listed like files and always categorised as [`MediaCategory::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectoryPolicy {
    #[default]
    Include,
    Skip,
}

#[derive(Debug, Clone)]
pub struct CatalogScanner<L = FsDirectoryLister> {
    lister: L,
    /// Published prefix prepended to every address
    url_prefix: String,
    directories: DirectoryPolicy,
}

impl Default for CatalogScanner {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_PREFIX)
    }
}

impl CatalogScanner {
    pub fn new(url_prefix: impl Into<String>) -> Self {
        Self::with_lister(FsDirectoryLister, url_prefix)
    }
}

impl<L: DirectoryLister> CatalogScanner<L> {
    pub fn with_lister(lister: L, url_prefix: impl Into<String>) -> Self {
        Self {
            lister,
            url_prefix: url_prefix.into(),
            directories: DirectoryPolicy::default(),
        }
    }

    /// Choose whether subdirectories appear in the catalog
    pub fn with_directory_policy(mut self, policy: DirectoryPolicy) -> Self {
        self.directories = policy;
        self
    }

    /// Scan `dir` and return its entries in natural name order.
    pub fn scan<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<CatalogEntry>> {
        let dir = dir.as_ref();

        let listed = self
            .lister
            .list(dir)
            .map_err(|err| CatalogError::directory_read(dir, err))?;

        let mut keyed: Vec<(String, String, bool)> = Vec::with_capacity(listed.len());
        for entry in listed {
            if entry.is_dir && self.directories == DirectoryPolicy::Skip {
                continue;
            }
            match entry.name.into_string() {
                Ok(name) => {
                    let key = ordering::collation_key(&name);
                    keyed.push((key, name, entry.is_dir));
                }
                Err(raw) => {
                    warn!(
                        dir = %dir.display(),
                        name = ?raw,
                        "skipping entry with a non UTF-8 name"
                    );
                }
            }
        }

        keyed.sort_by(|a, b| {
            ordering::compare_keyed((a.0.as_str(), a.1.as_str()), (b.0.as_str(), b.1.as_str()))
        });

        let entries: Vec<CatalogEntry> = keyed
            .into_iter()
            .map(|(_, name, is_dir)| self.entry_for(name, is_dir))
            .collect();

        info!(
            dir = %dir.display(),
            count = entries.len(),
            "catalog scan complete"
        );

        Ok(entries)
    }

    fn entry_for(&self, name: String, is_dir: bool) -> CatalogEntry {
        let category = if is_dir {
            MediaCategory::Other
        } else {
            classify(&name)
        };
        let url = encode_address(&self.url_prefix, &name);
        debug!(name = %name, category = %category, "catalogued entry");
        CatalogEntry {
            name,
            url,
            category,
        }
    }
}
