//! Trigger mode resolution.
//!
//! An instance in trigger mode either scans only when another instance
//! asks it to over MQTT (arrive, depart, or both), or announces its own
//! arrive/depart results so other instances can trigger off them, or both.
//! The facets are orthogonal, so they are kept as independent booleans.

use std::collections::BTreeSet;
use std::fmt;

use super::error::UnknownTriggerMode;

const ARRIVE: char = 'a';
const DEPART: char = 'd';
const REPORT_OUT: char = 'r';

/// Independent facets of trigger mode. All false unless `-t` was given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TriggerMode {
    /// Scan for arrivals only when signalled over MQTT.
    pub on_arrive: bool,

    /// Scan for departures only when signalled over MQTT.
    pub on_depart: bool,

    /// Publish a trigger signal after a local scan detects an arrival or departure.
    pub report_out: bool,
}

impl TriggerMode {
    /// Resolves a compound trigger argument such as `"ad"` or `"ra"`.
    ///
    /// Characters are treated as a set, so order and repetition do not matter.
    /// The argument must be non-empty and consist only of `a`, `d` and `r`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTriggerMode`] for any other input; no facet is set in that case.
    pub fn resolve(arg: &str) -> Result<Self, UnknownTriggerMode> {
        let mut chars: BTreeSet<char> = arg.chars().collect();
        let report_out = chars.remove(&REPORT_OUT);

        let scan_facets = if chars.is_empty() {
            Some((false, false))
        } else if chars.iter().all(|c| matches!(*c, ARRIVE | DEPART)) {
            Some((chars.contains(&ARRIVE), chars.contains(&DEPART)))
        } else {
            None
        };

        match scan_facets {
            Some((on_arrive, on_depart)) if on_arrive || on_depart || report_out => Ok(Self {
                on_arrive,
                on_depart,
                report_out,
            }),
            _ => Err(UnknownTriggerMode {
                value: arg.to_owned(),
            }),
        }
    }

    /// Returns `true` if any facet is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.on_arrive || self.on_depart || self.report_out
    }

    /// Merges the facets of `other` into `self`. Facets are only ever set, never cleared.
    pub const fn merge(&mut self, other: Self) {
        self.on_arrive |= other.on_arrive;
        self.on_depart |= other.on_depart;
        self.report_out |= other.report_out;
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scan = match (self.on_arrive, self.on_depart) {
            (true, true) => Some("arrive and depart"),
            (true, false) => Some("arrive"),
            (false, true) => Some("depart"),
            (false, false) => None,
        };

        match (scan, self.report_out) {
            (Some(scan), true) => write!(f, "scan on {scan} trigger, report out"),
            (Some(scan), false) => write!(f, "scan on {scan} trigger"),
            (None, true) => f.write_str("report out"),
            (None, false) => f.write_str("disabled"),
        }
    }
}
