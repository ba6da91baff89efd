//! Default values for the preference layer.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Environment variable overriding the state directory.
pub const HOME_ENV: &str = "PRESENCE_MONITOR_HOME";

/// Directory name used under the platform data directory.
pub const STATE_DIR_NAME: &str = "presence-monitor";

/// File holding the version string of the last run.
pub const VERSION_FILE: &str = ".previous_version";

/// Cache of Bluetooth manufacturer names keyed by address prefix.
pub const MANUFACTURER_CACHE_FILE: &str = ".manufacturer_cache";

/// Cache of names resolved for public (non-beacon) devices.
pub const PUBLIC_NAME_CACHE_FILE: &str = ".public_name_cache";

/// Placeholder shown when no previous version has been recorded.
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Version of the running build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
