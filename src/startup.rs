//! Startup sequencing between argument resolution and the monitoring engine.
//!
//! Help and version requests print and exit without touching any on-disk
//! state. Every other start announces and records the running version
//! first, then reports the resolution diagnostics in argument order.

use crate::config::{ConfigError, Diagnostic, Launch, Outcome, Resolution, defaults};
use crate::state::{VersionStore, report_and_update};

#[cfg(test)]
#[path = "startup_tests.rs"]
mod tests;

/// What the entry point should do next.
#[derive(Debug)]
pub enum Startup {
    /// Print the text to stdout and exit successfully.
    Print(String),

    /// Hand the resolved preferences to the monitoring engine.
    Launch(Launch),

    /// Report the error and exit with a configuration failure.
    Fatal(ConfigError),
}

/// Sequences a parsed command line into the next startup step.
///
/// The version record in `store` is only read and updated when the process
/// goes on to run or fails on its configuration, never for help or version.
pub fn dispatch(resolution: Resolution, store: &impl VersionStore) -> Startup {
    let outcome = match resolution.outcome {
        Ok(Outcome::Help(text) | Outcome::Version(text)) => return Startup::Print(text),
        Ok(Outcome::Run(launch)) => Startup::Launch(launch),
        Err(e) => Startup::Fatal(e),
    };

    report_and_update(store, defaults::VERSION);
    resolution.diagnostics.iter().for_each(Diagnostic::emit);
    outcome
}
