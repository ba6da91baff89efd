//! Resolution of the state directory from the environment.

use std::path::{Path, PathBuf};

use crate::cache::CacheFiles;

use super::defaults;

/// Directory holding the version record and the name caches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    dir: PathBuf,
}

impl StatePaths {
    /// Uses `dir` as the state directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolves the state directory from the process environment.
    ///
    /// Order: `PRESENCE_MONITOR_HOME` if set and non-empty, then the
    /// platform data directory, then the current directory.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(std::env::var_os(defaults::HOME_ENV).map(PathBuf::from))
    }

    fn resolve(home: Option<PathBuf>) -> Self {
        let dir = home
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| dirs::data_local_dir().map(|d| d.join(defaults::STATE_DIR_NAME)))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file recording the last-run version.
    #[must_use]
    pub fn version_file(&self) -> PathBuf {
        self.dir.join(defaults::VERSION_FILE)
    }

    /// Locations of the name caches.
    #[must_use]
    pub fn caches(&self) -> CacheFiles {
        CacheFiles::in_dir(&self.dir)
    }
}
