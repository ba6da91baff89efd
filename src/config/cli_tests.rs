//! Tests for the CLI flag definitions.

use clap::CommandFactory;

use super::cli::Cli;

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn every_flag_has_a_short_and_long_name() {
    let command = Cli::command();
    for arg in command.get_arguments() {
        assert!(arg.get_short().is_some(), "{} has no short name", arg.get_id());
        assert!(arg.get_long().is_some(), "{} has no long name", arg.get_id());
    }
}

#[test]
fn only_trigger_mode_and_config_dir_take_values() {
    let command = Cli::command();
    let mut valued: Vec<char> = command
        .get_arguments()
        .filter(|arg| arg.get_action().takes_values())
        .filter_map(clap::Arg::get_short)
        .collect();
    valued.sort_unstable();

    assert_eq!(valued, vec!['D', 't']);
}

#[test]
fn short_names_match_documented_surface() {
    let command = Cli::command();
    let mut actual: Vec<char> = command
        .get_arguments()
        .filter_map(clap::Arg::get_short)
        .collect();
    actual.sort_unstable();

    let mut expected: Vec<char> = "hvcCEsexRdrubfgtamD".chars().collect();
    expected.sort_unstable();

    assert_eq!(actual, expected);
}

#[test]
fn help_text_lists_flags() {
    let help = Cli::help_text();

    assert!(help.contains("--clean-caches"));
    assert!(help.contains("--heartbeat"));
    assert!(help.contains("-t, --trigger-mode <MODE>"));
}

#[test]
fn version_text_includes_name_and_version() {
    let version = Cli::version_text();

    assert!(version.starts_with("presence-monitor "));
    assert!(version.ends_with(env!("CARGO_PKG_VERSION")));
}
