//! Post-deserialization semantic validation for plugin scripts.
//!
//! These checks enforce constraints that `serde` attributes cannot express,
//! such as "non-empty after trimming". Diagnostic codes are already
//! validated at deserialization time by the
//! [`DiagnosticCode`](crate::harness::DiagnosticCode) newtype. The entry
//! point is [`validate_script`], called by the loader after successful
//! YAML deserialization.

use super::error::ScriptError;
use super::types::Script;

/// Returns `true` if the string is empty or contains only whitespace.
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Constructs a [`ScriptError::ValidationFailed`] for the given script.
fn fail(script: &Script, reason: String) -> ScriptError {
    ScriptError::ValidationFailed {
        plugin: script.plugin.clone(),
        reason,
        diagnostic: None,
    }
}

/// Validates a deserialized plugin script against semantic constraints.
///
/// Checks applied (in order):
///
/// - `plugin` is non-empty after trimming.
/// - Every diagnostic message is non-empty after trimming.
///
/// An empty `diagnostics` list is valid: it scripts a clean compilation.
///
/// # Errors
///
/// Returns [`ScriptError::ValidationFailed`] with the plugin name and a
/// deterministic reason string on the first constraint violation.
pub(crate) fn validate_script(script: &Script) -> Result<(), ScriptError> {
    if is_blank(&script.plugin) {
        return Err(fail(
            script,
            "plugin must be non-empty after trimming".to_owned(),
        ));
    }

    for (i, diagnostic) in script.diagnostics.iter().enumerate() {
        let pos = i + 1;
        if is_blank(&diagnostic.message) {
            return Err(fail(
                script,
                format!("Diagnostic {pos}: message must be non-empty after trimming"),
            ));
        }
    }

    Ok(())
}
