//! Error types for plugin script loading and validation.

use camino::Utf8PathBuf;

use super::diagnostic::ScriptDiagnostic;
use crate::harness::host::HostError;

/// Errors that can occur when reading, loading, or validating a plugin
/// script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The script file could not be read from the fixture directory.
    #[error("failed to read plugin script '{path}'")]
    Read {
        /// The script path that failed to read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML deserialization failed (malformed YAML or schema mismatch).
    #[error("YAML deserialization failed: {message}")]
    Deserialize {
        /// The parser's failure message.
        message: String,
        /// Source-located diagnostic payload, when the parser reported a
        /// location.
        diagnostic: Option<ScriptDiagnostic>,
    },

    /// The script file did not contain exactly one YAML document.
    #[error("plugin script must contain exactly one document, found {count}")]
    DocumentCount {
        /// The number of documents found.
        count: usize,
    },

    /// A structural constraint was violated after deserialization.
    #[error("validation failed for plugin script '{plugin}': {reason}")]
    ValidationFailed {
        /// The plugin name the script declared.
        plugin: String,
        /// A human-readable explanation of the violation.
        reason: String,
        /// Source-located diagnostic payload.
        diagnostic: Option<ScriptDiagnostic>,
    },
}

impl ScriptError {
    /// Returns the structured diagnostic payload, when one was recorded.
    #[must_use]
    pub const fn diagnostic(&self) -> Option<&ScriptDiagnostic> {
        match self {
            Self::Deserialize { diagnostic, .. } | Self::ValidationFailed { diagnostic, .. } => {
                diagnostic.as_ref()
            }
            Self::Read { .. } | Self::DocumentCount { .. } => None,
        }
    }
}

impl From<ScriptError> for HostError {
    fn from(error: ScriptError) -> Self {
        let message = error.to_string();
        Self::with_source(message, error)
    }
}
