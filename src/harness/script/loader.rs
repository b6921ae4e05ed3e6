//! Plugin script loading.
//!
//! Provides [`load_script`] which deserializes a single YAML document into
//! a [`Script`], validating diagnostic codes at deserialization time (via
//! the [`DiagnosticCode`](crate::harness::DiagnosticCode) newtype) and
//! enforcing structural constraints post-deserialization.

use super::diagnostic::{ScriptDiagnostic, ScriptDiagnosticCode, SourceLocation};
use super::error::ScriptError;
use super::raw::RawScript;
use super::types::Script;
use super::validate::validate_script;

/// Synthetic source identifier used by [`load_script`].
const INLINE_SOURCE: &str = "<inline>";

/// Loads a plugin script from a YAML string.
///
/// A script file must contain exactly one YAML document with a `plugin`
/// name and an optional `diagnostics` list. Unknown keys are rejected.
/// Diagnostic codes are validated at deserialization time; message
/// non-blankness is checked post-deserialization.
///
/// # Errors
///
/// Returns [`ScriptError::Deserialize`] if the YAML is malformed, does not
/// match the script schema, or contains an invalid diagnostic code.
/// Returns [`ScriptError::DocumentCount`] if the input holds zero or more
/// than one document, and [`ScriptError::ValidationFailed`] if a
/// structural constraint is violated.
///
/// # Examples
///
///     use plugincheck::harness::script::load_script;
///
///     let yaml = r#"
///     plugin: http-service-validator
///     diagnostics:
///       - code: HTTP_101
///         message: "`remote` methods are not allowed in http:Service"
///     "#;
///     let script = load_script(yaml).unwrap();
///     assert_eq!(script.diagnostics.len(), 1);
pub fn load_script(input: &str) -> Result<Script, ScriptError> {
    load_script_with_source(INLINE_SOURCE, input)
}

/// Loads a plugin script from YAML and records diagnostics against an
/// explicit source identifier.
///
/// This function behaves like [`load_script`] but associates parser and
/// validator diagnostics with `source` in structured diagnostic payloads.
///
/// # Errors
///
/// Returns [`ScriptError::Deserialize`] when YAML parsing or
/// deserialization fails, [`ScriptError::DocumentCount`] for anything but
/// a single document, and [`ScriptError::ValidationFailed`] when semantic
/// validation fails.
pub fn load_script_with_source(source: &str, input: &str) -> Result<Script, ScriptError> {
    let mut raw_scripts: Vec<RawScript> = serde_saphyr::from_multiple(input).map_err(|error| {
        let message = error.to_string();
        let diagnostic = error
            .location()
            .map(|location| parse_diagnostic(source, &message, location));
        ScriptError::Deserialize {
            message,
            diagnostic,
        }
    })?;

    if raw_scripts.len() != 1 {
        return Err(ScriptError::DocumentCount {
            count: raw_scripts.len(),
        });
    }
    let Some(raw) = raw_scripts.pop() else {
        return Err(ScriptError::DocumentCount { count: 0 });
    };

    let script = raw.to_script();
    validate_script(&script).map_err(|error| attach_validation_diagnostic(error, source, &raw))?;
    Ok(script)
}

fn attach_validation_diagnostic(
    error: ScriptError,
    source: &str,
    raw: &RawScript,
) -> ScriptError {
    match error {
        ScriptError::ValidationFailed { plugin, reason, .. } => {
            let location = raw.location_for_validation_reason(&reason);
            let diagnostic = validation_diagnostic(source, &reason, location);
            ScriptError::ValidationFailed {
                plugin,
                reason,
                diagnostic: Some(diagnostic),
            }
        }
        other => other,
    }
}

fn parse_diagnostic(
    source: &str,
    message: &str,
    location: serde_saphyr::Location,
) -> ScriptDiagnostic {
    ScriptDiagnostic {
        code: ScriptDiagnosticCode::ParseFailure,
        location: location_for_source(source, location),
        message: first_line(message),
    }
}

fn validation_diagnostic(
    source: &str,
    reason: &str,
    location: serde_saphyr::Location,
) -> ScriptDiagnostic {
    ScriptDiagnostic {
        code: ScriptDiagnosticCode::ValidationFailure,
        location: location_for_source(source, location),
        message: reason.to_owned(),
    }
}

fn location_for_source(source: &str, location: serde_saphyr::Location) -> SourceLocation {
    let line = usize::try_from(location.line()).ok().unwrap_or(usize::MAX);
    let column = usize::try_from(location.column())
        .ok()
        .unwrap_or(usize::MAX);
    SourceLocation {
        source: source.to_owned(),
        line,
        column,
    }
}

fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or(message).to_owned()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
