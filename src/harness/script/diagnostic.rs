//! Structured diagnostics for plugin script loading failures.
//!
//! Not to be confused with the [`DiagnosticRecord`](crate::harness::DiagnosticRecord)
//! values a compilation produces: the payloads here describe failures of
//! the script itself, with source locations, so a broken fixture can be
//! pinpointed from a test failure.

/// Stable diagnostic classification codes for script loading failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptDiagnosticCode {
    /// YAML deserialization or parse failure.
    ParseFailure,
    /// Post-deserialization semantic validation failure.
    ValidationFailure,
}

impl ScriptDiagnosticCode {
    /// Returns the stable, machine-readable code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParseFailure => "script.parse_failure",
            Self::ValidationFailure => "script.validation_failure",
        }
    }
}

/// Source location attached to a script diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Source file or source identifier.
    pub source: String,
    /// 1-indexed line number.
    pub line: usize,
    /// 1-indexed column number.
    pub column: usize,
}

/// Structured script diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDiagnostic {
    /// Stable diagnostic code for programmatic handling.
    pub code: ScriptDiagnosticCode,
    /// Primary source location.
    pub location: SourceLocation,
    /// Deterministic human-readable fallback message.
    pub message: String,
}

impl ScriptDiagnostic {
    /// Renders the diagnostic into a deterministic single-line format
    /// suitable for snapshot tests.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{} | {}:{}:{} | {}",
            self.code.as_str(),
            self.location.source,
            self.location.line,
            self.location.column,
            self.message
        )
    }
}
