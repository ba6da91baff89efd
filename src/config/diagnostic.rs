//! Diagnostic lines produced while resolving preferences.
//!
//! The parser collects diagnostics as values instead of logging directly,
//! so callers decide when they are emitted and tests can assert on them.

use std::fmt;

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Describes the effect of a recognized flag.
    Info,
    /// A usage problem or a non-fatal I/O failure.
    Warning,
}

/// A single human-readable diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Returns `true` for warnings.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Emits the diagnostic through `tracing` at the matching level.
    pub fn emit(&self) {
        match self.severity {
            Severity::Info => tracing::info!("{}", self.message),
            Severity::Warning => tracing::warn!("{}", self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
