//! CLI argument definitions using clap.
//!
//! Defines every flag the daemon recognizes. The definition doubles as the
//! flag table for [`scan`](super::scan) and as the source of the usage and
//! version text. Clap itself never parses the argument vector.

use clap::{CommandFactory, Parser};

/// Bluetooth LE presence monitor
///
/// Scans for known devices and reports arrivals and departures over MQTT.
#[derive(Debug, Parser)]
#[command(name = "presence-monitor")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Show this help text and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Print the version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Remove the manufacturer and public name caches
    #[arg(short = 'c', long = "clean-caches")]
    pub clean_caches: bool,

    /// Clear retained MQTT messages on startup
    #[arg(short = 'C', long = "clean-mqtt-retained")]
    pub clean_mqtt_retained: bool,

    /// Publish a status message at the start and end of every scan
    #[arg(short = 'E', long = "report-scan-status-messages")]
    pub report_scan_status_messages: bool,

    /// Publish all reports to a single MQTT topic
    #[arg(short = 's', long = "single-topic-mode")]
    pub single_topic_mode: bool,

    /// Publish host environment readings
    #[arg(short = 'e', long = "publish-environment")]
    pub publish_environment: bool,

    /// Retain status messages on the MQTT broker
    #[arg(short = 'x', long = "retain-status-messages")]
    pub retain_status_messages: bool,

    /// Redact addresses and names in log output
    #[arg(short = 'R', long = "redact")]
    pub redact: bool,

    /// Restore default behavior preferences
    #[arg(short = 'd', long = "restore-defaults")]
    pub restore_defaults: bool,

    /// Scan for arrivals and departures on a repeating schedule
    #[arg(short = 'r', long = "periodic-scan")]
    pub periodic_scan: bool,

    /// Update the installed system service definition
    #[arg(short = 'u', long = "update-service")]
    pub update_service: bool,

    /// Report iBeacon advertisements
    #[arg(short = 'b', long = "beacon-mode")]
    pub beacon_mode: bool,

    /// Format MQTT topics with the device alias instead of its address
    #[arg(short = 'f', long = "format-topics")]
    pub format_topics: bool,

    /// Report generic public advertisements
    #[arg(short = 'g', long = "public-mode")]
    pub public_mode: bool,

    /// Trigger mode: 'a' arrive, 'd' depart, 'r' report out, or a combination
    #[arg(
        short = 't',
        long = "trigger-mode",
        value_name = "MODE",
        allow_hyphen_values = true
    )]
    pub trigger_mode: Option<String>,

    /// Report every scan result, not only changes
    #[arg(short = 'a', long = "report-all-results")]
    pub report_all_results: bool,

    /// Publish a periodic heartbeat
    #[arg(short = 'm', long = "heartbeat")]
    pub heartbeat: bool,

    /// Alternate configuration directory
    #[arg(
        short = 'D',
        long = "alt-config-dir",
        value_name = "DIR",
        allow_hyphen_values = true
    )]
    pub alt_config_dir: Option<String>,
}

/// Argument ids as generated by the clap derive (the field names).
///
/// Use these constants for compile-time safety when querying matches.
pub mod id {
    pub const HELP: &str = "help";
    pub const VERSION: &str = "version";
    pub const CLEAN_CACHES: &str = "clean_caches";
    pub const CLEAN_MQTT_RETAINED: &str = "clean_mqtt_retained";
    pub const REPORT_SCAN_STATUS_MESSAGES: &str = "report_scan_status_messages";
    pub const SINGLE_TOPIC_MODE: &str = "single_topic_mode";
    pub const PUBLISH_ENVIRONMENT: &str = "publish_environment";
    pub const RETAIN_STATUS_MESSAGES: &str = "retain_status_messages";
    pub const REDACT: &str = "redact";
    pub const RESTORE_DEFAULTS: &str = "restore_defaults";
    pub const PERIODIC_SCAN: &str = "periodic_scan";
    pub const UPDATE_SERVICE: &str = "update_service";
    pub const BEACON_MODE: &str = "beacon_mode";
    pub const FORMAT_TOPICS: &str = "format_topics";
    pub const PUBLIC_MODE: &str = "public_mode";
    pub const TRIGGER_MODE: &str = "trigger_mode";
    pub const REPORT_ALL_RESULTS: &str = "report_all_results";
    pub const HEARTBEAT: &str = "heartbeat";
    pub const ALT_CONFIG_DIR: &str = "alt_config_dir";
}

impl Cli {
    /// Renders the full usage text.
    #[must_use]
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }

    /// Renders the version line printed by `-v`.
    #[must_use]
    pub fn version_text() -> String {
        let command = Self::command();
        format!(
            "{} {}",
            command.get_name(),
            command.get_version().unwrap_or(super::defaults::VERSION)
        )
    }
}
