//! Shared test helpers for integration tests.

use camino::Utf8PathBuf;
use plugincheck::harness::script::ScriptedHost;
use plugincheck::harness::{
    CompiledUnit, EnvironmentConfig, FixtureId, FixtureRoot, HarnessError, compile_fixture,
};

/// Compiles a fixture package under `tests/fixtures/` through the scripted
/// host, with the environment pointing at the checked-in test distribution.
pub fn compile_package(name: &str) -> Result<CompiledUnit, HarnessError> {
    let host = ScriptedHost::new();
    let root = FixtureRoot::new(Utf8PathBuf::from("tests/fixtures"));
    let fixture = FixtureId::new(name)?;
    let env = EnvironmentConfig::new(Utf8PathBuf::from("tests/fixtures/distribution"));
    compile_fixture(&host, &root, &fixture, &env)
}
