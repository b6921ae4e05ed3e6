//! The scripted [`CompilationHost`] implementation.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use super::error::ScriptError;
use super::loader::load_script_with_source;
use crate::harness::env::EnvironmentConfig;
use crate::harness::host::{CompilationHost, CompiledUnit, HostError};

/// Script file name the host looks for inside each fixture directory.
pub const DEFAULT_SCRIPT_NAME: &str = "plugin-output.yaml";

/// A compilation host that replays diagnostics from a script file.
///
/// The host checks the environment's distribution root first, then opens
/// the fixture directory through a capability-scoped handle and reads the
/// script from it. Every failure mode is a [`HostError`]; a script that
/// merely declares diagnostics is a successful compilation.
#[derive(Debug, Clone)]
pub struct ScriptedHost {
    script_name: String,
}

impl ScriptedHost {
    /// Creates a host reading [`DEFAULT_SCRIPT_NAME`] from each fixture.
    #[must_use]
    pub fn new() -> Self {
        Self {
            script_name: DEFAULT_SCRIPT_NAME.to_owned(),
        }
    }

    /// Creates a host reading a custom script file name from each fixture.
    #[must_use]
    pub fn with_script_name(script_name: impl Into<String>) -> Self {
        Self {
            script_name: script_name.into(),
        }
    }
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilationHost for ScriptedHost {
    fn compile(
        &self,
        fixture_dir: &Utf8Path,
        env: &EnvironmentConfig,
    ) -> Result<CompiledUnit, HostError> {
        let distribution_root = env.distribution_root();
        if !distribution_root.is_dir() {
            return Err(HostError::new(format!(
                "distribution root '{distribution_root}' does not exist"
            )));
        }

        let dir = Dir::open_ambient_dir(fixture_dir, ambient_authority()).map_err(|error| {
            HostError::with_source(
                format!("cannot open fixture directory '{fixture_dir}'"),
                error,
            )
        })?;
        let source = format!("{fixture_dir}/{}", self.script_name);
        let input = dir.read_to_string(&self.script_name).map_err(|error| {
            HostError::from(ScriptError::Read {
                path: source.clone().into(),
                source: error,
            })
        })?;

        debug!(script = %source, "loading plugin script");
        let script = load_script_with_source(&source, &input)?;
        debug!(
            plugin = %script.plugin,
            diagnostics = script.diagnostics.len(),
            "scripted compilation finished"
        );
        Ok(CompiledUnit::new(script.diagnostics))
    }
}
