//! Internal raw script types with source-location capture.
//!
//! These types mirror the public script shape but use `serde_saphyr::Spanned`
//! for selected fields so validation failures can be mapped back to line and
//! column coordinates deterministically.

use serde::Deserialize;
use serde_saphyr::{Location, Spanned};

use super::types::Script;
use crate::harness::code::DiagnosticCode;
use crate::harness::diagnostic::{DiagnosticRecord, Severity};

/// Raw plugin script with location-carrying fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawScript {
    pub(crate) plugin: Spanned<String>,
    #[serde(default)]
    pub(crate) diagnostics: Vec<RawScriptDiagnostic>,
}

/// Raw scripted diagnostic with span-aware fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawScriptDiagnostic {
    pub(crate) code: Spanned<DiagnosticCode>,
    pub(crate) message: Spanned<String>,
    #[serde(default)]
    pub(crate) severity: Severity,
}

impl RawScript {
    /// Converts this raw script into the public script type.
    #[must_use]
    pub(crate) fn to_script(&self) -> Script {
        Script {
            plugin: self.plugin.value.clone(),
            diagnostics: self
                .diagnostics
                .iter()
                .map(|d| DiagnosticRecord {
                    code: d.code.value.clone(),
                    message: d.message.value.clone(),
                    severity: d.severity,
                })
                .collect(),
        }
    }

    /// Returns the canonical script-level fallback location.
    #[must_use]
    pub(crate) const fn plugin_location(&self) -> Location {
        self.plugin.referenced
    }

    /// Returns the best-effort field location for a validation error reason.
    #[must_use]
    pub(crate) fn location_for_validation_reason(&self, reason: &str) -> Location {
        self.location_for_reason(reason)
            .unwrap_or_else(|| self.plugin_location())
    }

    fn location_for_reason(&self, reason: &str) -> Option<Location> {
        if reason.starts_with("plugin must be non-empty") {
            return Some(self.plugin.referenced);
        }

        let index = indexed_error_position(reason, "Diagnostic ")?;
        let entry = self.diagnostics.get(index)?;
        Some(entry.message.referenced)
    }
}

/// Parses indexed validation reason prefixes like `Diagnostic 2: …`.
fn indexed_error_position(reason: &str, prefix: &str) -> Option<usize> {
    let tail = reason.strip_prefix(prefix)?;
    let (raw_index, _) = tail.split_once(':')?;
    let parsed = raw_index.trim().parse::<usize>().ok()?;
    parsed.checked_sub(1)
}
