//! Fixture compilation and positional diagnostic assertion.
//!
//! Provides the scenario protocol used by acceptance tests: resolve the
//! fixture, compile it via the external host, assert the total diagnostic
//! count, then assert code and message at each expected position. A
//! compilation failure or host error is fatal to the scenario; the harness
//! performs no retries.

use tracing::debug;

use super::code::DiagnosticCode;
use super::diagnostic::DiagnosticRecord;
use super::env::EnvironmentConfig;
use super::error::{DiagnosticField, HarnessError};
use super::fixture::{FixtureId, FixtureRoot};
use super::host::{CompilationHost, CompiledUnit};

/// One expected `(index, code, message)` triple, compared positionally
/// against the produced diagnostic sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    /// Position of the diagnostic in the produced sequence.
    pub index: usize,
    /// Expected diagnostic code.
    pub code: DiagnosticCode,
    /// Expected diagnostic message.
    pub message: String,
}

impl Expectation {
    /// Creates an expectation for the diagnostic at `index`.
    #[must_use]
    pub const fn new(index: usize, code: DiagnosticCode, message: String) -> Self {
        Self {
            index,
            code,
            message,
        }
    }
}

/// Resolves a fixture and compiles it through the external host.
///
/// Resolution happens first: a missing fixture fails before any compile
/// attempt. Host errors pass through unmodified.
///
/// # Errors
///
/// Returns [`HarnessError::FixtureNotFound`] if the fixture directory does
/// not exist, or [`HarnessError::Host`] if the host fails to compile.
pub fn compile_fixture<H: CompilationHost + ?Sized>(
    host: &H,
    root: &FixtureRoot,
    fixture: &FixtureId,
    env: &EnvironmentConfig,
) -> Result<CompiledUnit, HarnessError> {
    let fixture_dir = root.resolve(fixture)?;
    debug!(fixture = %fixture, dir = %fixture_dir, "compiling fixture");
    let unit = host.compile(&fixture_dir, env)?;
    debug!(
        fixture = %fixture,
        diagnostics = unit.diagnostics().len(),
        "compilation finished"
    );
    Ok(unit)
}

/// Asserts that the compilation produced exactly `expected` diagnostics.
///
/// # Errors
///
/// Returns [`HarnessError::CountMismatch`] reporting both counts when they
/// differ.
pub fn assert_diagnostic_count(
    diagnostics: &[DiagnosticRecord],
    expected: usize,
) -> Result<(), HarnessError> {
    let actual = diagnostics.len();
    if actual != expected {
        return Err(HarnessError::CountMismatch { expected, actual });
    }
    Ok(())
}

/// Asserts code and message of the diagnostic at `index`.
///
/// # Errors
///
/// Returns [`HarnessError::IndexOutOfRange`] if `index` is past the end of
/// the sequence, or [`HarnessError::AssertionMismatch`] reporting both the
/// expected and the actual value when `message` or `code` differs.
pub fn assert_diagnostic(
    diagnostics: &[DiagnosticRecord],
    index: usize,
    expected_message: &str,
    expected_code: &str,
) -> Result<(), HarnessError> {
    let Some(diagnostic) = diagnostics.get(index) else {
        return Err(HarnessError::IndexOutOfRange {
            index,
            len: diagnostics.len(),
        });
    };

    if diagnostic.message != expected_message {
        return Err(HarnessError::AssertionMismatch {
            index,
            field: DiagnosticField::Message,
            expected: expected_message.to_owned(),
            actual: diagnostic.message.clone(),
        });
    }
    if diagnostic.code.as_str() != expected_code {
        return Err(HarnessError::AssertionMismatch {
            index,
            field: DiagnosticField::Code,
            expected: expected_code.to_owned(),
            actual: diagnostic.code.as_str().to_owned(),
        });
    }
    Ok(())
}

/// Runs the scenario protocol over a produced diagnostic sequence: the
/// count assertion first, then each positional expectation in order.
///
/// # Errors
///
/// Returns the first failing assertion's error; see
/// [`assert_diagnostic_count`] and [`assert_diagnostic`].
pub fn assert_expectations(
    diagnostics: &[DiagnosticRecord],
    expected_count: usize,
    expectations: &[Expectation],
) -> Result<(), HarnessError> {
    assert_diagnostic_count(diagnostics, expected_count)?;
    for expectation in expectations {
        assert_diagnostic(
            diagnostics,
            expectation.index,
            &expectation.message,
            expectation.code.as_str(),
        )?;
    }
    Ok(())
}

/// Asserts that the produced diagnostics equal the expected multiset of
/// `(code, message)` pairs, ignoring order but respecting multiplicity.
///
/// The strict positional operations remain the primary API; this variant
/// exists for scenarios where the host's ordering is not contractual.
/// Missing and surplus entries are reported in first-seen order.
///
/// # Errors
///
/// Returns [`HarnessError::UnorderedMismatch`] listing expected entries
/// that were not produced and produced entries that were not expected.
pub fn assert_diagnostics_unordered(
    diagnostics: &[DiagnosticRecord],
    expected: &[(DiagnosticCode, String)],
) -> Result<(), HarnessError> {
    let mut wanted: indexmap::IndexMap<(&str, &str), usize> = indexmap::IndexMap::new();
    for (code, message) in expected {
        *wanted.entry((code.as_str(), message.as_str())).or_insert(0) += 1;
    }

    let mut surplus = Vec::new();
    for diagnostic in diagnostics {
        let key = (diagnostic.code.as_str(), diagnostic.message.as_str());
        match wanted.get_mut(&key) {
            Some(count) if *count > 0 => *count -= 1,
            _ => surplus.push(format!("{}: {}", diagnostic.code, diagnostic.message)),
        }
    }

    let missing: Vec<String> = wanted
        .iter()
        .flat_map(|((code, message), count)| {
            std::iter::repeat(format!("{code}: {message}")).take(*count)
        })
        .collect();

    if missing.is_empty() && surplus.is_empty() {
        return Ok(());
    }
    Err(HarnessError::UnorderedMismatch { missing, surplus })
}

#[cfg(test)]
#[path = "acceptance_tests.rs"]
mod tests;
