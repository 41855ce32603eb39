//! Domain types and validators for the terracotta module file.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// File name used when neither `--config` nor `TERRACOTTA_CONFIG` is set.
pub const DEFAULT_CONFIG_FILE: &str = "terracotta.yaml";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration, usually `terracotta.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TerracottaConfig {
    /// Directory every module path is relative to.
    pub base_path: PathBuf,
    /// Module declarations in registry order.
    pub modules: Vec<ModuleDecl>,
}

/// A single module declaration.
///
/// `path` doubles as the module identifier: dependencies refer to other
/// modules by their `path`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ModuleDecl {
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl ModuleDecl {
    #[must_use]
    pub fn new(path: impl Into<String>, depends_on: &[&str]) -> Self {
        Self {
            path: path.into(),
            depends_on: depends_on.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TerracottaConfig {
    /// Directory terraform runs in for `module`.
    #[must_use]
    pub fn module_dir(&self, module: &str) -> PathBuf {
        self.base_path.join(module)
    }

    /// Resolve a relative `base_path` against the directory holding the
    /// config file, so runs do not depend on the caller's working directory.
    #[must_use]
    pub fn anchored_at(mut self, config_dir: &Path) -> Self {
        if self.base_path.is_relative() {
            self.base_path = config_dir.join(&self.base_path);
        }
        self
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates module declarations before a graph is built.
///
/// Dependency resolution is not checked here; unknown dependencies and
/// cycles are reported by the graph sort.
///
/// # Errors
///
/// Returns an error for an empty or absolute module path, a module declared
/// twice, or a dependency listed twice by the same module.
pub fn validate_config(config: &TerracottaConfig) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, module) in config.modules.iter().enumerate() {
        if module.path.trim().is_empty() {
            return Err(ConfigError::EmptyModulePath { index: index + 1 }.into());
        }
        if Path::new(&module.path).is_absolute() {
            return Err(ConfigError::AbsoluteModulePath {
                module: module.path.clone(),
            }
            .into());
        }
        if !seen.insert(module.path.as_str()) {
            return Err(ConfigError::DuplicateModule {
                module: module.path.clone(),
            }
            .into());
        }
        let mut deps = HashSet::new();
        for dep in &module.depends_on {
            if !deps.insert(dep.as_str()) {
                return Err(ConfigError::DuplicateDependency {
                    module: module.path.clone(),
                    dependency: dep.clone(),
                }
                .into());
            }
        }
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
