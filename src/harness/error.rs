//! Error types for fixture resolution, compilation, and assertion.

use camino::Utf8PathBuf;

use super::fixture::FixtureId;
use super::host::HostError;

/// The diagnostic field that failed a positional assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticField {
    /// The machine-readable diagnostic code.
    Code,
    /// The human-readable diagnostic message.
    Message,
}

impl DiagnosticField {
    /// Returns the lowercase field name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for DiagnosticField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while compiling a fixture or asserting on its
/// diagnostics.
///
/// Every error is local to a single scenario; the harness performs no
/// retries and no cross-scenario recovery.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The fixture directory does not exist under the fixture root.
    #[error("fixture '{fixture}' not found at '{path}'")]
    FixtureNotFound {
        /// The fixture identifier that failed to resolve.
        fixture: FixtureId,
        /// The absolute or root-relative path that was probed.
        path: Utf8PathBuf,
    },

    /// The compilation host itself failed; propagated unmodified.
    #[error(transparent)]
    Host(#[from] HostError),

    /// The compilation produced a different number of diagnostics than
    /// expected.
    #[error("expected {expected} diagnostics, found {actual}")]
    CountMismatch {
        /// The diagnostic count the scenario expected.
        expected: usize,
        /// The diagnostic count the compilation produced.
        actual: usize,
    },

    /// A positional assertion indexed past the end of the diagnostic
    /// sequence.
    #[error("diagnostic index {index} is out of range for {len} diagnostics")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the produced diagnostic sequence.
        len: usize,
    },

    /// A diagnostic's code or message differs from the expectation at its
    /// index.
    #[error("diagnostic {index}: {field} mismatch: expected '{expected}', found '{actual}'")]
    AssertionMismatch {
        /// The index of the mismatching diagnostic.
        index: usize,
        /// Which field differed.
        field: DiagnosticField,
        /// The expected value.
        expected: String,
        /// The value the compilation produced.
        actual: String,
    },

    /// The produced diagnostics differ from the expected multiset of
    /// `(code, message)` pairs.
    #[error("diagnostic multiset mismatch: missing {missing:?}, surplus {surplus:?}")]
    UnorderedMismatch {
        /// Expected entries absent from the produced diagnostics, rendered
        /// as `CODE: message`.
        missing: Vec<String>,
        /// Produced entries absent from the expectation, rendered as
        /// `CODE: message`.
        surplus: Vec<String>,
    },

    /// A diagnostic code failed lexical validation.
    #[error("invalid diagnostic code '{code}': {reason}")]
    InvalidCode {
        /// The code string that failed validation.
        code: String,
        /// A human-readable explanation of why the code is invalid.
        reason: String,
    },

    /// A fixture identifier failed lexical validation.
    #[error("invalid fixture id '{fixture}': {reason}")]
    InvalidFixtureId {
        /// The identifier string that failed validation.
        fixture: String,
        /// A human-readable explanation of why the identifier is invalid.
        reason: String,
    },
}
