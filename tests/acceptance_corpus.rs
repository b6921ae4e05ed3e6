//! Regression corpus tests for fixture packages and their scripts.

mod common;

use common::compile_package;
use plugincheck::harness::{HarnessError, assert_diagnostic, assert_diagnostic_count};
use rstest::rstest;

const REMOTE_METHODS_NOT_ALLOWED: &str = "`remote` methods are not allowed in http:Service";

#[rstest]
#[case::remote_methods("sample_package_1", 3)]
#[case::mixed_codes("sample_package_2", 3)]
#[case::clean("clean_package", 0)]
fn valid_fixture_corpus_compiles_with_expected_counts(
    #[case] fixture: &str,
    #[case] expected_count: usize,
) {
    let unit = compile_package(fixture)
        .unwrap_or_else(|e| panic!("expected {fixture} to compile, got: {e}"));
    assert!(
        assert_diagnostic_count(unit.diagnostics(), expected_count).is_ok(),
        "expected {expected_count} diagnostics for {fixture}"
    );
}

#[rstest]
#[case::unknown_key("invalid_unknown_key", "unknown field")]
#[case::blank_message("invalid_blank_message", "message must be non-empty")]
#[case::bad_code("invalid_bad_code", "must match the pattern")]
#[case::missing_script("missing_script_package", "failed to read plugin script")]
fn invalid_fixture_corpus_fails_as_host_error(
    #[case] fixture: &str,
    #[case] expected_fragment: &str,
) {
    let result = compile_package(fixture);
    assert!(result.is_err(), "expected {fixture} to fail");

    let Err(error) = result else {
        panic!("error should be present");
    };
    assert!(
        matches!(error, HarnessError::Host(_)),
        "script failures must surface as host errors, got: {error}"
    );
    let msg = error.to_string();
    assert!(
        msg.contains(expected_fragment),
        "error for {fixture} should contain '{expected_fragment}', \
         got: {msg}"
    );
}

#[test]
fn unknown_fixture_fails_with_fixture_not_found() {
    let result = compile_package("no_such_package");
    assert!(matches!(
        result,
        Err(HarnessError::FixtureNotFound { .. })
    ));
}

#[test]
fn recompiling_a_fixture_yields_an_identical_sequence() {
    let first = compile_package("sample_package_2").expect("first compile should succeed");
    let second = compile_package("sample_package_2").expect("second compile should succeed");
    assert_eq!(first.diagnostics(), second.diagnostics());
}

#[test]
fn remote_method_diagnostics_match_at_every_index() {
    let unit = compile_package("sample_package_1").expect("fixture should compile");
    let diagnostics = unit.diagnostics();
    for index in 0..3 {
        assert!(
            assert_diagnostic(diagnostics, index, REMOTE_METHODS_NOT_ALLOWED, "HTTP_101").is_ok(),
            "diagnostic {index} should match the remote-method expectation"
        );
    }
}
