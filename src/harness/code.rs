//! Validated diagnostic code newtype.
//!
//! Diagnostic codes are the stable machine-readable identifiers a plugin
//! attaches to each diagnostic, such as `HTTP_101`. Codes must match the
//! ASCII pattern `^[A-Z][A-Z0-9_]*$` so that assertion failures and
//! snapshot output stay unambiguous.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Deserialize;
use serde::de;

use super::error::HarnessError;

/// Validates that a string is a legal diagnostic code.
///
/// A code must:
/// - Start with an ASCII uppercase letter.
/// - Contain only ASCII uppercase letters, digits, and underscores.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidCode`] if the string fails either check.
///
/// # Examples
///
///     use plugincheck::harness::validate_code;
///
///     assert!(validate_code("HTTP_101").is_ok());
///     assert!(validate_code("http_101").is_err());
///     assert!(validate_code("101_HTTP").is_err());
pub fn validate_code(s: &str) -> Result<(), HarnessError> {
    if s.is_empty() {
        return Err(HarnessError::InvalidCode {
            code: s.to_owned(),
            reason: "code must not be empty".to_owned(),
        });
    }

    if !is_valid_code_pattern(s) {
        return Err(HarnessError::InvalidCode {
            code: s.to_owned(),
            reason: concat!(
                "must match the pattern ",
                "^[A-Z][A-Z0-9_]*$ ",
                "(ASCII uppercase letters, digits, and underscores; ",
                "must start with an uppercase letter)"
            )
            .to_owned(),
        });
    }

    Ok(())
}

/// Returns `true` if the string matches `^[A-Z][A-Z0-9_]*$`.
#[must_use]
fn is_valid_code_pattern(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_uppercase() {
        return false;
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// A validated diagnostic code.
///
/// Construction (via deserialization or [`DiagnosticCode::new`]) ensures
/// the contained string matches `^[A-Z][A-Z0-9_]*$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticCode(String);

impl Hash for DiagnosticCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl DiagnosticCode {
    /// Creates a new `DiagnosticCode` after validating the input.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidCode`] if the string fails code
    /// validation.
    pub fn new(s: impl Into<String>) -> Result<Self, HarnessError> {
        let code = s.into();
        validate_code(&code)?;
        Ok(Self(code))
    }

    /// Returns the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for DiagnosticCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for DiagnosticCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DiagnosticCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DiagnosticCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        validate_code(&s).map_err(de::Error::custom)?;
        Ok(Self(s))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // ── Valid codes ─────────────────────────────────────────────────

    #[rstest]
    #[case::http_101("HTTP_101")]
    #[case::http_102("HTTP_102")]
    #[case::single_letter("E")]
    #[case::digits_after_letter("E0001")]
    #[case::trailing_underscore("HTTP_")]
    fn valid_codes_are_accepted(#[case] code: &str) {
        assert!(validate_code(code).is_ok());
    }

    // ── Invalid codes ───────────────────────────────────────────────

    #[rstest]
    #[case::empty("")]
    #[case::lowercase("http_101")]
    #[case::mixed_case("Http_101")]
    #[case::starts_with_digit("101_HTTP")]
    #[case::starts_with_underscore("_HTTP")]
    #[case::contains_hyphen("HTTP-101")]
    #[case::contains_space("HTTP 101")]
    fn invalid_codes_are_rejected(#[case] code: &str) {
        assert!(validate_code(code).is_err());
    }

    #[test]
    fn rejection_reason_names_the_pattern() {
        let err = validate_code("http_101");
        let msg = err.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.contains("must match the pattern"));
    }

    #[test]
    fn newtype_construction_validates() {
        assert!(DiagnosticCode::new("HTTP_101").is_ok());
        assert!(DiagnosticCode::new("bad code").is_err());
    }

    #[test]
    fn newtype_compares_against_str() {
        let code = DiagnosticCode::new("HTTP_101").expect("valid code");
        assert_eq!(code, "HTTP_101");
        assert_eq!(code.as_str(), "HTTP_101");
    }
}
