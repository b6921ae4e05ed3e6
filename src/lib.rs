//! `plugincheck` — an acceptance-test harness for compiler plugins that
//! report diagnostics.
//!
//! This crate provides the core library functionality for compiling test
//! fixtures through an external compilation host and asserting on the
//! ordered diagnostic sequence the compilation produces.

/// Harness types for fixture compilation and diagnostic assertion.
pub mod harness;
