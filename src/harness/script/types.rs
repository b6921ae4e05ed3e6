//! Public plugin script representation.

use crate::harness::diagnostic::DiagnosticRecord;

/// A loaded and validated plugin script.
///
/// The diagnostics appear in script order, which is the order the
/// [`ScriptedHost`](super::ScriptedHost) replays them in. Recompiling an
/// unmodified fixture therefore yields an identical sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// Name of the plugin the script stands in for.
    pub plugin: String,
    /// Ordered diagnostics the scripted compilation produces.
    pub diagnostics: Vec<DiagnosticRecord>,
}
