//! Fixture compilation and diagnostic assertion for plugin acceptance tests.
//!
//! This module provides the harness around an external compilation host: a
//! fixture is resolved on disk, compiled through the [`CompilationHost`]
//! trait, and the resulting ordered diagnostic sequence is asserted against
//! expected `(index, message, code)` triples.

mod acceptance;
mod code;
mod diagnostic;
mod env;
mod error;
mod fixture;
mod host;
#[cfg(feature = "test-support")]
pub mod script;

pub use acceptance::{
    Expectation, assert_diagnostic, assert_diagnostic_count, assert_diagnostics_unordered,
    assert_expectations, compile_fixture,
};
pub use code::{DiagnosticCode, validate_code};
pub use diagnostic::{DiagnosticRecord, Severity};
pub use env::EnvironmentConfig;
pub use error::{DiagnosticField, HarnessError};
pub use fixture::{FixtureId, FixtureRoot};
pub use host::{CompilationHost, CompiledUnit, HostError};
