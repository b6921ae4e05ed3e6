//! Scripted compilation host for harness self-testing.
//!
//! A [`ScriptedHost`] stands in for the real compiler: it reads a
//! `plugin-output.yaml` script from the fixture directory and replays the
//! diagnostics the script declares, in script order. Scripts are
//! deserialized strictly with unknown-key rejection and validated after
//! deserialization; failures carry source-located structured diagnostics
//! and surface as host errors.

mod diagnostic;
mod error;
mod host;
mod loader;
mod raw;
mod types;
mod validate;

pub use diagnostic::{ScriptDiagnostic, ScriptDiagnosticCode, SourceLocation};
pub use error::ScriptError;
pub use host::{DEFAULT_SCRIPT_NAME, ScriptedHost};
pub use loader::{load_script, load_script_with_source};
pub use types::Script;
