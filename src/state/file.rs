//! File-based version record.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{LoadResult, StateError, VersionStore};

/// File-based implementation of [`VersionStore`].
///
/// The file holds a single line with the version string.
///
/// # Atomic Writes
///
/// Uses write-to-temp-then-rename pattern to prevent corruption:
/// 1. Write to `{path}.tmp`
/// 2. Rename `{path}.tmp` to `{path}`
#[derive(Debug, Clone)]
pub struct FileVersionStore {
    path: PathBuf,
}

impl FileVersionStore {
    /// Creates a version store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the version file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VersionStore for FileVersionStore {
    fn load(&self) -> LoadResult {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => LoadResult::Loaded(content.trim().to_owned()),
            Err(e) if e.kind() == ErrorKind::NotFound => LoadResult::NotFound,
            Err(e) => LoadResult::Unreadable {
                reason: format!("Failed to read file: {e}"),
            },
        }
    }

    fn save(&self, version: &str) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StateError::Write)?;
            }
        }

        // Append .tmp instead of replacing the extension; the file name has none.
        let temp_path = PathBuf::from(format!("{}.tmp", self.path.display()));

        std::fs::write(&temp_path, format!("{version}\n")).map_err(StateError::Write)?;
        std::fs::rename(&temp_path, &self.path).map_err(StateError::Write)?;

        Ok(())
    }
}
