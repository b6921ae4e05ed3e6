//! Fixture identity and on-disk resolution.
//!
//! A fixture is a self-contained source directory named by a single path
//! segment, prepared ahead of test execution and treated as read-only
//! input. [`FixtureId`] validates the segment at construction time so
//! resolution can never escape the fixture root.

use std::fmt;

use camino::Utf8PathBuf;

use super::error::HarnessError;

/// A validated fixture identifier.
///
/// Construction via [`FixtureId::new`] ensures the contained string is a
/// single path segment: ASCII alphanumerics, `_`, `-`, and `.`, starting
/// with an alphanumeric or underscore. Separator characters and leading
/// dots are rejected, so `..` can never be smuggled into resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixtureId(String);

impl FixtureId {
    /// Creates a new `FixtureId` after validating the input.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidFixtureId`] if the string is empty,
    /// starts with a dot or hyphen, or contains characters outside
    /// ASCII alphanumerics, `_`, `-`, and `.`.
    pub fn new(s: impl Into<String>) -> Result<Self, HarnessError> {
        let id = s.into();
        validate_fixture_id(&id)?;
        Ok(Self(id))
    }

    /// Returns the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for FixtureId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for FixtureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates that a string is a legal fixture identifier.
fn validate_fixture_id(s: &str) -> Result<(), HarnessError> {
    if s.is_empty() {
        return Err(HarnessError::InvalidFixtureId {
            fixture: s.to_owned(),
            reason: "fixture id must not be empty".to_owned(),
        });
    }

    let mut chars = s.chars();
    let starts_legally = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
    if !starts_legally {
        return Err(HarnessError::InvalidFixtureId {
            fixture: s.to_owned(),
            reason: concat!(
                "must start with an ASCII letter, digit, or underscore ",
                "(leading dots and hyphens are rejected)"
            )
            .to_owned(),
        });
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.') {
        return Err(HarnessError::InvalidFixtureId {
            fixture: s.to_owned(),
            reason: concat!(
                "may only contain ASCII letters, digits, underscores, ",
                "hyphens, and dots (path separators are rejected)"
            )
            .to_owned(),
        });
    }

    Ok(())
}

/// The deterministic root directory under which fixtures live.
///
/// Each fixture is a subdirectory of the root named by its identifier,
/// e.g. `tests/fixtures/sample_package_1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRoot {
    root: Utf8PathBuf,
}

impl FixtureRoot {
    /// Creates a fixture root over the given directory.
    #[must_use]
    pub const fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    /// Returns the root directory path.
    #[must_use]
    pub fn path(&self) -> &camino::Utf8Path {
        &self.root
    }

    /// Resolves a fixture identifier to its directory path.
    ///
    /// Resolution fails before any compile attempt; a missing fixture is
    /// never handed to the compilation host.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::FixtureNotFound`] if the fixture directory
    /// does not exist under the root.
    pub fn resolve(&self, fixture: &FixtureId) -> Result<Utf8PathBuf, HarnessError> {
        let path = self.root.join(fixture.as_str());
        if !path.is_dir() {
            return Err(HarnessError::FixtureNotFound {
                fixture: fixture.clone(),
                path,
            });
        }
        Ok(path)
    }
}
