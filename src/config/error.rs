//! Error types for preference resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal error raised while resolving preferences.
///
/// Every variant terminates the process with a configuration exit code;
/// recoverable problems are reported as warnings instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The alternate configuration directory does not exist.
    #[error("Alternate config directory '{}' does not exist", path.display())]
    MissingConfigDir {
        /// Path supplied on the command line
        path: PathBuf,
    },
}

/// Soft failure of trigger mode resolution.
///
/// Carries the offending string so the warning can name it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown trigger mode '{value}': expected a combination of 'a', 'd' and 'r'")]
pub struct UnknownTriggerMode {
    /// The rejected trigger mode argument
    pub value: String,
}
