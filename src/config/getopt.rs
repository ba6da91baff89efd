//! Getopt-style scanning of the raw argument vector.
//!
//! The flag table is taken from the clap definition in [`Cli`], so short
//! names, long names and value arity are declared in exactly one place.
//! Lexing goes through `clap_lex`, which keeps values and positional
//! arguments as `OsStr` so paths that are not valid UTF-8 survive intact.
//! Scanning never fails: unknown flags and missing values become warning
//! tokens in their original position.

use std::ffi::{OsStr, OsString};

use clap::{Command, CommandFactory};
use clap_lex::{ArgCursor, RawArgs, ShortFlags};

use super::cli::Cli;

/// One scanned element of the argument vector, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A recognized flag, identified by its clap argument id.
    Flag {
        /// Clap argument id (see [`super::cli::id`])
        id: String,
        /// Argument of the flag, for flags that take one
        value: Option<OsString>,
    },

    /// A problem with the argument vector that does not stop scanning.
    Warning(String),
}

/// Result of scanning an argument vector.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scan {
    /// Flags and warnings in argument order.
    pub tokens: Vec<Token>,

    /// Arguments left after flag scanning stopped.
    pub positional: Vec<OsString>,
}

#[derive(Debug)]
struct FlagSpec {
    id: String,
    short: Option<char>,
    long: Option<String>,
    takes_value: bool,
}

#[derive(Debug)]
struct FlagTable(Vec<FlagSpec>);

impl FlagTable {
    fn from_command(command: &Command) -> Self {
        let flags = command
            .get_arguments()
            .filter(|arg| !arg.is_positional())
            .map(|arg| FlagSpec {
                id: arg.get_id().as_str().to_owned(),
                short: arg.get_short(),
                long: arg.get_long().map(str::to_owned),
                takes_value: arg.get_action().takes_values(),
            })
            .collect();
        Self(flags)
    }

    fn short(&self, name: char) -> Option<&FlagSpec> {
        self.0.iter().find(|spec| spec.short == Some(name))
    }

    fn long(&self, name: &str) -> Option<&FlagSpec> {
        self.0.iter().find(|spec| spec.long.as_deref() == Some(name))
    }
}

/// Scans an argument vector, skipping the program name in the first position.
///
/// Supports clustered short flags (`-rb`), attached and detached values
/// (`-tad`, `-t ad`), long flags with `=` or a separate value, and `--`
/// as the end of flags. Scanning also stops at the first non-flag argument.
pub fn scan<I, T>(argv: I) -> Scan
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let table = FlagTable::from_command(&Cli::command());
    let raw = RawArgs::new(argv);
    let mut cursor = raw.cursor();
    let mut scan = Scan::default();

    // Program name
    let _ = raw.next_os(&mut cursor);

    while let Some(arg) = raw.next(&mut cursor) {
        if arg.is_escape() {
            scan.take_remaining(&raw, &mut cursor);
            break;
        }

        if let Some((name, inline)) = arg.to_long() {
            scan.push_long(&table, name, inline, &raw, &mut cursor);
        } else if let Some(shorts) = arg.to_short() {
            scan.push_cluster(&table, shorts, &raw, &mut cursor);
        } else {
            scan.positional.push(arg.to_value_os().to_owned());
            scan.take_remaining(&raw, &mut cursor);
            break;
        }
    }

    scan
}

impl Scan {
    fn push_flag(&mut self, spec: &FlagSpec, value: Option<OsString>) {
        self.tokens.push(Token::Flag {
            id: spec.id.clone(),
            value,
        });
    }

    fn warn(&mut self, message: String) {
        self.tokens.push(Token::Warning(message));
    }

    fn take_remaining(&mut self, raw: &RawArgs, cursor: &mut ArgCursor) {
        self.positional
            .extend(raw.remaining(cursor).map(OsStr::to_owned));
    }

    fn push_long(
        &mut self,
        table: &FlagTable,
        name: Result<&str, &OsStr>,
        inline: Option<&OsStr>,
        raw: &RawArgs,
        cursor: &mut ArgCursor,
    ) {
        let spec = match name {
            Ok(name) => table.long(name),
            Err(_) => None,
        };
        let shown = match name {
            Ok(name) => name.to_owned(),
            Err(name) => name.to_string_lossy().into_owned(),
        };

        let Some(spec) = spec else {
            self.warn(format!("unknown option --{shown}, ignoring"));
            return;
        };

        if spec.takes_value {
            match inline.or_else(|| raw.next_os(cursor)) {
                Some(value) => self.push_flag(spec, Some(value.to_owned())),
                None => self.warn(format!("option --{shown} requires an argument, ignoring")),
            }
        } else if inline.is_some() {
            self.warn(format!("option --{shown} does not take an argument, ignoring"));
        } else {
            self.push_flag(spec, None);
        }
    }

    fn push_cluster(
        &mut self,
        table: &FlagTable,
        mut shorts: ShortFlags<'_>,
        raw: &RawArgs,
        cursor: &mut ArgCursor,
    ) {
        while let Some(next) = shorts.next_flag() {
            let name = match next {
                Ok(name) => name,
                Err(rest) => {
                    self.warn(format!(
                        "unknown option -{}, ignoring",
                        rest.to_string_lossy()
                    ));
                    return;
                }
            };

            let Some(spec) = table.short(name) else {
                self.warn(format!("unknown option -{name}, ignoring"));
                continue;
            };

            if !spec.takes_value {
                self.push_flag(spec, None);
                continue;
            }

            // The remainder of the cluster is the value; otherwise take the next argument.
            let value = shorts
                .next_value_os()
                .filter(|attached| !attached.is_empty())
                .or_else(|| raw.next_os(cursor));
            match value {
                Some(value) => self.push_flag(spec, Some(value.to_owned())),
                None => self.warn(format!("option -{name} requires an argument, ignoring")),
            }
            return;
        }
    }
}
