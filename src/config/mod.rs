//! Preference resolution layer.
//!
//! This module provides:
//! - The CLI flag definitions ([`Cli`])
//! - Single-pass argument resolution ([`ArgumentParser`])
//! - Trigger mode resolution ([`TriggerMode`])
//! - Alternate config directory validation ([`validate_config_dir`])
//! - The resolved preferences ([`PreferenceState`], [`Launch`])
//! - State directory resolution ([`StatePaths`])
//! - Default values ([`defaults`])
//!
//! # Flag Semantics
//!
//! Flags only ever enable: there is no way to turn a preference off, and
//! repeating a flag has no further effect. Short flags may be clustered
//! (`-rbg`) and value flags accept attached or separate values
//! (`-tad`, `-t ad`). Scanning stops at `--` or at the first non-flag
//! argument; everything after it is passed through as positional.
//!
//! # Diagnostics
//!
//! Every recognized flag produces exactly one [`Diagnostic`] describing its
//! effect, in the order the flags appear. Unknown flags and malformed
//! values produce warnings and never stop resolution.
//!
//! # Terminal Requests
//!
//! `-h` and `-v` win over everything else in the argument vector: when
//! either is present no cache is cleaned, no directory is validated and
//! the version record is left untouched.

mod cli;
mod config_dir;
pub mod defaults;
mod diagnostic;
mod error;
mod getopt;
mod parser;
mod paths;
mod preferences;
mod trigger;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, id};
pub use config_dir::validate_config_dir;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{ConfigError, UnknownTriggerMode};
pub use getopt::{Scan, Token, scan};
pub use parser::{ArgumentParser, Outcome, Resolution};
pub use paths::StatePaths;
pub use preferences::{Launch, PreferenceState};
pub use trigger::TriggerMode;
