use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

/// A raw directory entry before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: OsString,
    pub is_dir: bool,
}

impl ListedEntry {
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Source of directory listings for the scanner.
///
/// Implementations must either return every entry of `dir` or fail; a
/// partial listing is never acceptable.
pub trait DirectoryLister: Send + Sync {
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>>;
}

impl<L: DirectoryLister + ?Sized> DirectoryLister for Arc<L> {
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>> {
        (**self).list(dir)
    }
}

/// Lists a real directory, one level deep.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>> {
        let mut entries = Vec::new();
        // The ReadDir handle is closed when it drops, on success or on `?`.
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            entries.push(ListedEntry {
                name: entry.file_name(),
                is_dir,
            });
        }
        debug!(dir = %dir.display(), count = entries.len(), "listed media directory");
        Ok(entries)
    }
}
