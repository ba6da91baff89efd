//! Presence Monitor: preference resolution layer
//!
//! Turns the command line of a Bluetooth LE presence monitoring daemon into
//! a validated, immutable set of preferences, records the last-run version,
//! and clears the on-disk name caches on request.

pub mod cache;
pub mod config;
pub mod startup;
pub mod state;
