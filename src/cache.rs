//! Invalidation of the on-disk name caches.
//!
//! The scanning engine keeps two caches between runs: manufacturer names
//! looked up by address prefix, and names resolved for public devices.
//! Removing them forces the engine to rebuild both on its next run.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::defaults;

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;

/// A cache file that exists but could not be removed.
#[derive(Debug, Error)]
#[error("Failed to remove cache file '{}': {source}", path.display())]
pub struct CacheError {
    /// Path of the cache file
    pub path: PathBuf,
    /// Underlying I/O error
    #[source]
    pub source: io::Error,
}

/// Outcome of [`CacheFiles::clean`].
#[derive(Debug, Default)]
pub struct CleanReport {
    /// Cache files that existed and were removed.
    pub removed: Vec<PathBuf>,

    /// Cache files that could not be removed.
    pub failed: Vec<CacheError>,
}

/// Locations of the manufacturer and public name caches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheFiles {
    manufacturer: PathBuf,
    public_name: PathBuf,
}

impl CacheFiles {
    /// Creates cache locations from explicit paths.
    #[must_use]
    pub fn new(manufacturer: impl Into<PathBuf>, public_name: impl Into<PathBuf>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            public_name: public_name.into(),
        }
    }

    /// Uses the default cache file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(
            dir.join(defaults::MANUFACTURER_CACHE_FILE),
            dir.join(defaults::PUBLIC_NAME_CACHE_FILE),
        )
    }

    #[must_use]
    pub fn manufacturer(&self) -> &Path {
        &self.manufacturer
    }

    #[must_use]
    pub fn public_name(&self) -> &Path {
        &self.public_name
    }

    /// Removes both cache files.
    ///
    /// Each removal is attempted on its own: a missing file is not an error,
    /// and a failure on one file does not prevent removal of the other.
    pub fn clean(&self) -> CleanReport {
        let mut report = CleanReport::default();

        for path in [&self.manufacturer, &self.public_name] {
            match std::fs::remove_file(path) {
                Ok(()) => report.removed.push(path.clone()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(source) => report.failed.push(CacheError {
                    path: path.clone(),
                    source,
                }),
            }
        }

        report
    }
}
