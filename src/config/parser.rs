//! Single-pass resolution of the argument vector into [`PreferenceState`].

use std::ffi::{OsStr, OsString};

use crate::cache::CacheFiles;

use super::cli::{Cli, id};
use super::config_dir::validate_config_dir;
use super::diagnostic::Diagnostic;
use super::error::{ConfigError, UnknownTriggerMode};
use super::getopt::{self, Token};
use super::preferences::{Launch, PreferenceState};
use super::trigger::TriggerMode;

/// What the process should do once arguments are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the usage text and exit successfully.
    Help(String),

    /// Print the version and exit successfully.
    Version(String),

    /// Hand the resolved preferences to the monitoring engine.
    Run(Launch),
}

/// Result of [`ArgumentParser::parse`].
///
/// Diagnostics are kept even when resolution fails, so everything
/// produced before a fatal error can still be reported in order.
#[derive(Debug)]
pub struct Resolution {
    /// Diagnostic lines in argument order.
    pub diagnostics: Vec<Diagnostic>,

    /// The resolved outcome, or the fatal error that stopped resolution.
    pub outcome: Result<Outcome, ConfigError>,
}

/// Resolves command-line flags into preferences.
///
/// Holds only the locations the cache-clean flag acts on; every call to
/// [`parse`](Self::parse) starts from default preferences.
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    caches: CacheFiles,
}

impl ArgumentParser {
    #[must_use]
    pub const fn new(caches: CacheFiles) -> Self {
        Self { caches }
    }

    /// Parses `argv`, whose first element is the program name.
    ///
    /// Help and version requests are honored before anything else runs,
    /// wherever they appear. Otherwise flags take effect left to right,
    /// each producing one diagnostic. Unknown flags produce a warning and
    /// parsing continues. A missing alternate config directory stops
    /// resolution with [`ConfigError::MissingConfigDir`].
    pub fn parse<I, T>(&self, argv: I) -> Resolution
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let scan = getopt::scan(argv);

        if let Some(outcome) = terminal_request(&scan.tokens) {
            return Resolution {
                diagnostics: Vec::new(),
                outcome: Ok(outcome),
            };
        }

        let mut preferences = PreferenceState::default();
        let mut diagnostics = Vec::new();

        for token in scan.tokens {
            match token {
                Token::Warning(message) => diagnostics.push(Diagnostic::warning(message)),
                Token::Flag { id: flag, value } => {
                    let applied = self.apply(&flag, value, &mut preferences, &mut diagnostics);
                    if let Err(e) = applied {
                        return Resolution {
                            diagnostics,
                            outcome: Err(e),
                        };
                    }
                }
            }
        }

        Resolution {
            diagnostics,
            outcome: Ok(Outcome::Run(Launch {
                preferences,
                positional: scan.positional,
            })),
        }
    }

    fn apply(
        &self,
        flag: &str,
        value: Option<OsString>,
        preferences: &mut PreferenceState,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<(), ConfigError> {
        match flag {
            id::CLEAN_CACHES => self.clean_caches(diagnostics),
            id::TRIGGER_MODE => {
                diagnostics.push(apply_trigger(&value.unwrap_or_default(), preferences));
            }
            id::ALT_CONFIG_DIR => {
                let path = validate_config_dir(value.as_deref().unwrap_or_default())?;
                diagnostics.push(Diagnostic::info(format!(
                    "using alternate config directory {}",
                    path.display()
                )));
                preferences.config_dir = Some(path);
            }
            _ => diagnostics.push(match set_flag(flag, preferences) {
                Some(message) => Diagnostic::info(message),
                None => Diagnostic::warning(format!("option {flag} is not handled here, ignoring")),
            }),
        }
        Ok(())
    }

    fn clean_caches(&self, diagnostics: &mut Vec<Diagnostic>) {
        let report = self.caches.clean();
        diagnostics.extend(
            report
                .failed
                .iter()
                .map(|e| Diagnostic::warning(e.to_string())),
        );
        diagnostics.push(Diagnostic::info(format!(
            "manufacturer and public name caches cleaned ({} removed)",
            report.removed.len()
        )));
    }
}

/// Returns the help or version request appearing first, if any.
fn terminal_request(tokens: &[Token]) -> Option<Outcome> {
    tokens.iter().find_map(|token| match token {
        Token::Flag { id: flag, .. } if flag == id::HELP => Some(Outcome::Help(Cli::help_text())),
        Token::Flag { id: flag, .. } if flag == id::VERSION => {
            Some(Outcome::Version(Cli::version_text()))
        }
        _ => None,
    })
}

fn apply_trigger(arg: &OsStr, preferences: &mut PreferenceState) -> Diagnostic {
    let resolved = arg.to_str().map_or_else(
        || {
            Err(UnknownTriggerMode {
                value: arg.to_string_lossy().into_owned(),
            })
        },
        TriggerMode::resolve,
    );
    match resolved {
        Ok(mode) => {
            preferences.trigger.merge(mode);
            Diagnostic::info(format!("trigger mode: {}", preferences.trigger))
        }
        Err(e) => Diagnostic::warning(e.to_string()),
    }
}

/// Sets the boolean field behind `flag` and describes the effect.
fn set_flag(flag: &str, preferences: &mut PreferenceState) -> Option<&'static str> {
    let (field, message) = match flag {
        id::CLEAN_MQTT_RETAINED => (
            &mut preferences.clean_mqtt_retained,
            "clearing retained MQTT messages",
        ),
        id::REPORT_SCAN_STATUS_MESSAGES => (
            &mut preferences.mqtt_report_scan_messages,
            "reporting scan start and end over MQTT",
        ),
        id::SINGLE_TOPIC_MODE => (
            &mut preferences.mqtt_single_topic_mode,
            "publishing all reports to a single MQTT topic",
        ),
        id::PUBLISH_ENVIRONMENT => (
            &mut preferences.publish_environment,
            "publishing host environment readings",
        ),
        id::RETAIN_STATUS_MESSAGES => (
            &mut preferences.retain_mqtt_messages,
            "retaining MQTT status messages",
        ),
        id::REDACT => (
            &mut preferences.redact_logs,
            "redacting addresses and names in logs",
        ),
        id::RESTORE_DEFAULTS => (
            &mut preferences.restore_defaults,
            "restoring default behavior preferences",
        ),
        id::PERIODIC_SCAN => (&mut preferences.periodic_scan, "periodic scan mode enabled"),
        id::UPDATE_SERVICE => (
            &mut preferences.update_service,
            "updating the system service definition",
        ),
        id::BEACON_MODE => (&mut preferences.beacon_mode, "iBeacon reporting enabled"),
        id::FORMAT_TOPICS => (
            &mut preferences.format_mqtt_topics,
            "formatting MQTT topics with device aliases",
        ),
        id::PUBLIC_MODE => (&mut preferences.public_mode, "public device reporting enabled"),
        id::REPORT_ALL_RESULTS => (
            &mut preferences.report_all_results,
            "reporting all scan results",
        ),
        id::HEARTBEAT => (&mut preferences.heartbeat, "heartbeat enabled"),
        _ => return None,
    };

    *field = true;
    Some(message)
}
