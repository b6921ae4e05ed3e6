//! Per-call environment configuration for the compilation host.

use camino::{Utf8Path, Utf8PathBuf};

/// Configuration handed to the compilation host on every compile call.
///
/// The distribution root points at the prebuilt toolchain the host compiles
/// against. It is an explicit value rather than process-wide state so that
/// scenarios remain reproducible and parallel-safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    distribution_root: Utf8PathBuf,
}

impl EnvironmentConfig {
    /// Creates a configuration pointing at the given distribution root.
    #[must_use]
    pub const fn new(distribution_root: Utf8PathBuf) -> Self {
        Self { distribution_root }
    }

    /// Returns the distribution root path.
    #[must_use]
    pub fn distribution_root(&self) -> &Utf8Path {
        &self.distribution_root
    }
}
