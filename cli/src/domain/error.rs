//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Graph errors ──────────────────────────────────────────────────────────────

/// Structural faults found while ordering the module graph.
///
/// Both kinds come from the declared shape of the graph, never from a
/// transient condition, so callers must treat them as fatal for the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Traversal reached a module that is still on the active path.
    #[error("cyclic dependency detected at {module}")]
    CyclicDependency { module: String },

    #[error("unknown dependency {dependency} for module {module}")]
    UnknownDependency { dependency: String, module: String },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors found while validating a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("module #{index} has an empty path")]
    EmptyModulePath { index: usize },

    #[error("module '{module}' must be a path relative to base_path")]
    AbsoluteModulePath { module: String },

    #[error("module '{module}' is declared more than once")]
    DuplicateModule { module: String },

    #[error("module '{module}' lists dependency '{dependency}' more than once")]
    DuplicateDependency { module: String, dependency: String },
}
