//! Presence Monitor: preference resolution layer
//!
//! Entry point for the presence-monitor application.

use presence_monitor::config::{ArgumentParser, Launch, StatePaths};
use presence_monitor::startup::{Startup, dispatch};
use presence_monitor::state::FileVersionStore;
use std::process::ExitCode;

mod app;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    setup_tracing();

    let paths = StatePaths::from_env();
    let parser = ArgumentParser::new(paths.caches());
    let store = FileVersionStore::new(paths.version_file());

    match dispatch(parser.parse(std::env::args_os()), &store) {
        Startup::Print(text) => {
            println!("{text}");
            exit_code::SUCCESS
        }
        Startup::Launch(launch) => hand_off(&launch),
        Startup::Fatal(e) => {
            tracing::error!("Configuration error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
    }
}

/// Hands the resolved preferences to the monitoring engine.
fn hand_off(launch: &Launch) -> ExitCode {
    tracing::debug!("{}", launch.preferences);
    if !launch.positional.is_empty() {
        tracing::debug!("passing through arguments: {:?}", launch.positional);
    }
    tracing::info!("preferences resolved, starting monitor");
    exit_code::SUCCESS
}
