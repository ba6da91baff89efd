//! Resolved preferences handed to the monitoring engine.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use super::trigger::TriggerMode;

/// Fully resolved command-line preferences.
///
/// Built by [`ArgumentParser`](super::ArgumentParser) and never modified
/// afterwards. Every flag only ever sets a field, so repeating a flag has
/// no further effect.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // one field per CLI flag
pub struct PreferenceState {
    /// Repeating scan loop enabled
    pub periodic_scan: bool,

    /// iBeacon advertisement reporting enabled
    pub beacon_mode: bool,

    /// Generic public advertisement reporting enabled
    pub public_mode: bool,

    /// Report unchanged results, not only changes
    pub report_all_results: bool,

    pub redact_logs: bool,

    pub retain_mqtt_messages: bool,

    pub format_mqtt_topics: bool,

    pub publish_environment: bool,

    pub heartbeat: bool,

    pub mqtt_report_scan_messages: bool,

    pub mqtt_single_topic_mode: bool,

    pub clean_mqtt_retained: bool,

    pub restore_defaults: bool,

    pub update_service: bool,

    /// Alternate configuration directory. `None` means the default location.
    pub config_dir: Option<PathBuf>,

    /// Trigger mode facets
    pub trigger: TriggerMode,
}

impl fmt::Display for PreferenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config_dir = self
            .config_dir
            .as_ref()
            .map_or_else(|| "default".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Preferences {{ periodic_scan: {}, beacon: {}, public: {}, report_all: {}, \
             trigger: {}, heartbeat: {}, environment: {}, redact: {}, \
             mqtt: {{ retain: {}, format_topics: {}, single_topic: {}, scan_messages: {}, \
             clean_retained: {} }}, restore_defaults: {}, update_service: {}, config_dir: {} }}",
            self.periodic_scan,
            self.beacon_mode,
            self.public_mode,
            self.report_all_results,
            self.trigger,
            self.heartbeat,
            self.publish_environment,
            self.redact_logs,
            self.retain_mqtt_messages,
            self.format_mqtt_topics,
            self.mqtt_single_topic_mode,
            self.mqtt_report_scan_messages,
            self.clean_mqtt_retained,
            self.restore_defaults,
            self.update_service,
            config_dir,
        )
    }
}

/// Everything the monitoring engine receives at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    /// Resolved preferences, read-only for the rest of the process.
    pub preferences: PreferenceState,

    /// Arguments left after flag scanning stopped.
    pub positional: Vec<OsString>,
}
