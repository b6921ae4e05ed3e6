//! Unit tests for plugin script loading.

use rstest::*;

use super::*;
use crate::harness::diagnostic::Severity;

/// Minimal valid YAML for a plugin script.
const MINIMAL_YAML: &str = r#"
plugin: http-service-validator
diagnostics:
  - code: HTTP_101
    message: "`remote` methods are not allowed in http:Service"
"#;

#[rstest]
fn load_single_minimal_script() {
    let script = load_script(MINIMAL_YAML).expect("should parse");
    assert_eq!(script.plugin, "http-service-validator");
    assert_eq!(script.diagnostics.len(), 1);
    assert_eq!(
        script.diagnostics.first().map(|d| d.code.as_str()),
        Some("HTTP_101")
    );
}

#[rstest]
fn severity_defaults_to_error_when_omitted() {
    let script = load_script(MINIMAL_YAML).expect("should parse");
    assert_eq!(
        script.diagnostics.first().map(|d| d.severity),
        Some(Severity::Error)
    );
}

#[rstest]
fn explicit_severities_are_preserved() {
    let yaml = r#"
plugin: http-service-validator
diagnostics:
  - code: HTTP_101
    message: remote method rejected
    severity: ERROR
  - code: HTTP_102
    message: consider a resource method
    severity: WARNING
  - code: HTTP_103
    message: generated listener name
    severity: HINT
"#;
    let script = load_script(yaml).expect("should parse");
    let severities: Vec<Severity> = script.diagnostics.iter().map(|d| d.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Error, Severity::Warning, Severity::Hint]
    );
}

#[rstest]
fn script_order_is_preserved() {
    let yaml = r"
plugin: http-service-validator
diagnostics:
  - code: HTTP_102
    message: second code first
  - code: HTTP_101
    message: first code second
";
    let script = load_script(yaml).expect("should parse");
    let codes: Vec<&str> = script.diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["HTTP_102", "HTTP_101"]);
}

#[rstest]
fn reject_unknown_top_level_key() {
    let yaml = r"
plugin: http-service-validator
unknown_key: oops
diagnostics: []
";
    let result = load_script(yaml);
    assert!(result.is_err());
    let msg = result.err().map(|e| e.to_string()).unwrap_or_default();
    assert!(msg.contains("unknown field"));
}

#[rstest]
fn reject_missing_plugin_field() {
    let yaml = r"
diagnostics: []
";
    let result = load_script(yaml);
    assert!(result.is_err());
}

#[rstest]
fn reject_invalid_diagnostic_code() {
    let yaml = r"
plugin: http-service-validator
diagnostics:
  - code: http_101
    message: lowercase code
";
    let result = load_script(yaml);
    assert!(result.is_err());
    let msg = result.err().map(|e| e.to_string()).unwrap_or_default();
    assert!(msg.contains("must match the pattern"));
}

#[rstest]
fn reject_bad_severity_value() {
    let yaml = r"
plugin: http-service-validator
diagnostics:
  - code: HTTP_101
    message: bad severity
    severity: FATAL
";
    let result = load_script(yaml);
    assert!(result.is_err());
}

#[rstest]
fn reject_multi_document_input() {
    let yaml = r"
plugin: first
diagnostics: []
---
plugin: second
diagnostics: []
";
    let result = load_script(yaml);
    assert!(matches!(
        result,
        Err(ScriptError::DocumentCount { count: 2 })
    ));
}

#[rstest]
fn reject_empty_input() {
    let result = load_script("");
    assert!(result.is_err(), "an empty script file must not load");
}

#[rstest]
fn parse_diagnostics_include_explicit_source() {
    let yaml = "plugin: p\nunknown: key\n";
    let result = load_script_with_source("tests/fixtures/invalid_unknown_key", yaml);
    assert!(result.is_err(), "script should fail parsing");

    let error = result.expect_err("error expected");
    let diagnostic = error.diagnostic().expect("diagnostic expected");
    assert_eq!(
        diagnostic.code.as_str(),
        ScriptDiagnosticCode::ParseFailure.as_str()
    );
    assert_eq!(diagnostic.location.source, "tests/fixtures/invalid_unknown_key");
    assert!(diagnostic.location.line > 0);
    assert!(diagnostic.location.column > 0);
}

#[rstest]
fn validation_diagnostics_include_source_and_location() {
    let yaml = r#"
plugin: http-service-validator
diagnostics:
  - code: HTTP_101
    message: ""
"#;
    let result = load_script_with_source("tests/fixtures/invalid_blank_message", yaml);
    assert!(result.is_err(), "script should fail validation");

    let error = result.expect_err("error expected");
    let diagnostic = error.diagnostic().expect("diagnostic expected");
    assert_eq!(
        diagnostic.code.as_str(),
        ScriptDiagnosticCode::ValidationFailure.as_str()
    );
    assert_eq!(
        diagnostic.location.source,
        "tests/fixtures/invalid_blank_message"
    );
    assert!(diagnostic.location.line > 0);
    assert!(diagnostic.location.column > 0);
}

#[rstest]
fn loading_twice_yields_identical_scripts() {
    let first = load_script(MINIMAL_YAML).expect("should parse");
    let second = load_script(MINIMAL_YAML).expect("should parse");
    assert_eq!(first, second);
}
