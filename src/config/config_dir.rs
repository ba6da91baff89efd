//! Validation of the alternate configuration directory.

use std::ffi::OsStr;
use std::path::PathBuf;

use super::error::ConfigError;

/// Checks that `path` names an existing directory.
///
/// The path is returned exactly as given, byte for byte; trailing slashes and relative
/// paths are left for the configuration loader to interpret. Existence is
/// only checked here, not again before use.
///
/// # Errors
///
/// Returns [`ConfigError::MissingConfigDir`] if no directory exists at `path`.
pub fn validate_config_dir(path: &OsStr) -> Result<PathBuf, ConfigError> {
    let path = PathBuf::from(path);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(ConfigError::MissingConfigDir { path })
    }
}
