//! Diagnostic records produced by a compilation.
//!
//! A [`DiagnosticRecord`] is the harness's view of one structured compiler
//! message: a validated code, a message, and a severity. The compilation
//! host owns ordering; the harness only observes the sequence.

use serde::Deserialize;

use super::code::DiagnosticCode;

/// Severity of a produced diagnostic.
///
/// Mirrors the severity set of the external compilation host. Scripts
/// serialize severities in UPPERCASE; [`Severity::Error`] is the default
/// when the field is omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// The compilation cannot succeed.
    #[default]
    Error,
    /// Suspicious but not fatal.
    Warning,
    /// Informational guidance.
    Hint,
    /// Host-internal reporting, not user-actionable.
    Internal,
}

impl Severity {
    /// Returns the stable UPPERCASE severity string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Hint => "HINT",
            Self::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured diagnostic produced by compiling a fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    /// Stable diagnostic code for programmatic handling.
    pub code: DiagnosticCode,
    /// Human-readable diagnostic message.
    pub message: String,
    /// Severity reported by the host.
    pub severity: Severity,
}

impl DiagnosticRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub const fn new(code: DiagnosticCode, message: String, severity: Severity) -> Self {
        Self {
            code,
            message,
            severity,
        }
    }

    /// Renders the record into a deterministic single-line format suitable
    /// for snapshot tests.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{} | {} | {}", self.code, self.severity, self.message)
    }
}
