//! The external compilation host contract.
//!
//! The harness treats the compiler as a black box: a blocking function from
//! a fixture directory and an environment configuration to an ordered
//! diagnostic sequence. Host-internal caching and threading are the host's
//! concern; the harness only observes success or failure.

use camino::Utf8Path;

use super::diagnostic::DiagnosticRecord;
use super::env::EnvironmentConfig;

/// An error raised by the compilation host itself, distinct from any
/// diagnostics the compilation produces.
///
/// Host errors are fatal to a scenario and propagate through the harness
/// unmodified.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct HostError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl HostError {
    /// Creates a host error from a message alone.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a host error wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// An opaque handle to one completed compilation.
///
/// The diagnostic sequence is finite and produced once per compilation;
/// observing it again requires recompiling the fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledUnit {
    diagnostics: Vec<DiagnosticRecord>,
}

impl CompiledUnit {
    /// Wraps the ordered diagnostics of one compilation.
    #[must_use]
    pub const fn new(diagnostics: Vec<DiagnosticRecord>) -> Self {
        Self { diagnostics }
    }

    /// Returns the ordered diagnostic sequence.
    #[must_use]
    pub fn diagnostics(&self) -> &[DiagnosticRecord] {
        &self.diagnostics
    }

    /// Consumes the unit, yielding the ordered diagnostic sequence.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<DiagnosticRecord> {
        self.diagnostics
    }
}

/// The external collaborator that turns a fixture into diagnostics.
///
/// Implementations must be deterministic for an unmodified fixture:
/// recompiling the same fixture twice yields an identical diagnostic
/// sequence (same count, codes, messages, order).
pub trait CompilationHost {
    /// Compiles the fixture directory under the given environment.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when compilation cannot be carried out at all,
    /// for example due to environment misconfiguration. Diagnostics are
    /// not errors; a compilation that merely reports diagnostics succeeds.
    fn compile(
        &self,
        fixture_dir: &Utf8Path,
        env: &EnvironmentConfig,
    ) -> Result<CompiledUnit, HostError>;
}
