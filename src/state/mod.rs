//! Last-run version persistence.
//!
//! This module records which version of the daemon ran last, so an
//! upgrade can be announced once on the first start after it happens.

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::FileVersionStore;

use std::io;

use thiserror::Error;

use crate::config::defaults::UNKNOWN_VERSION;

/// Result of loading the version record.
///
/// Explicitly models all valid states to avoid ambiguity:
/// - A version was recorded by a previous run
/// - No record exists (first run)
/// - A record exists but could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    /// Version string recorded by the previous run.
    Loaded(String),

    /// No version file exists.
    NotFound,

    /// Version file exists but could not be read.
    /// Treated as "no prior version" and overwritten on save.
    Unreadable {
        /// Reason for the failure (for logging).
        reason: String,
    },
}

impl LoadResult {
    /// Returns the recorded version, or an empty string for `NotFound`/`Unreadable`.
    #[must_use]
    pub fn into_version(self) -> String {
        match self {
            Self::Loaded(version) => version,
            Self::NotFound | Self::Unreadable { .. } => String::new(),
        }
    }
}

/// Errors that can occur while saving the version record.
///
/// Read-side issues are modeled as [`LoadResult`] variants instead.
#[derive(Debug, Error)]
pub enum StateError {
    /// Failed to write the version file.
    #[error("Failed to write version file: {0}")]
    Write(#[source] io::Error),
}

/// A single persisted slot holding the last-run version.
///
/// Implementations should:
/// - Handle missing files gracefully (return `LoadResult::NotFound`)
/// - Degrade gracefully on read errors (return `LoadResult::Unreadable`)
///
/// # Testing
///
/// Use [`mock::MockVersionStore`] in tests to avoid filesystem dependencies.
pub trait VersionStore {
    /// Loads the version recorded by the previous run.
    fn load(&self) -> LoadResult;

    /// Records `version` as the last-run version.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&self, version: &str) -> Result<(), StateError>;
}

/// Outcome of comparing the recorded version with the running one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    /// Same version as the previous run; nothing was written.
    Unchanged {
        /// The running version
        version: String,
    },

    /// The version changed (or was never recorded) and the record was rewritten.
    Updated {
        /// Previously recorded version, empty if none
        from: String,
        /// The running version
        to: String,
    },
}

/// Compares the recorded version with `current`, logs the result, and
/// rewrites the record if they differ.
///
/// Save failures are logged and otherwise ignored.
pub fn report_and_update(store: &impl VersionStore, current: &str) -> VersionCheck {
    let loaded = store.load();
    if let LoadResult::Unreadable { reason } = &loaded {
        tracing::warn!("Version record unreadable, treating as first run: {reason}");
    }

    let previous = loaded.into_version();
    if previous == current {
        tracing::info!("starting presence-monitor v{current}");
        return VersionCheck::Unchanged {
            version: current.to_owned(),
        };
    }

    let shown = if previous.is_empty() {
        UNKNOWN_VERSION
    } else {
        previous.as_str()
    };
    tracing::info!("presence-monitor updated from v{shown} to v{current}");

    if let Err(e) = store.save(current) {
        tracing::warn!("{e}");
    }

    VersionCheck::Updated {
        from: previous,
        to: current.to_owned(),
    }
}
