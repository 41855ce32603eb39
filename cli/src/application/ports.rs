//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::TerracottaConfig;

// ── Value Types ───────────────────────────────────────────────────────────────

/// A single external process to run to completion.
pub struct Invocation<'a> {
    /// Program name or path, e.g. `"terraform"`.
    pub program: &'a str,
    pub args: &'a [&'a str],
    /// Working directory of the child process.
    pub dir: &'a Path,
    /// Extra environment variables for the child only.
    pub envs: &'a [(&'a str, &'a str)],
    /// Kill the child if it runs longer than this.
    pub timeout: Duration,
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    ///
    /// Runners that merge the two streams return them interleaved in
    /// `Output::stdout` with `Output::stderr` empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds its
    /// timeout. On timeout, the child process must be killed (not left
    /// orphaned). A non-zero exit is NOT an error; inspect `Output::status`.
    async fn run(&self, invocation: &Invocation<'_>) -> Result<Output>;
}

// ── Module Executor Port ──────────────────────────────────────────────────────

/// Runs the provisioning tool against one module directory.
#[allow(async_fn_in_trait)]
pub trait ModuleExecutor {
    /// Run the tool with `args` inside `dir` on behalf of `module`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool could not be run at all (missing
    /// directory, spawn failure, timeout). A tool that ran and exited
    /// non-zero is reported through `Output::status`.
    async fn run(&self, module: &str, dir: &Path, args: &[&str]) -> Result<Output>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the module configuration.
pub trait ConfigStore {
    /// Load the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    fn load(&self) -> Result<TerracottaConfig>;
    /// Location the configuration is read from.
    fn path(&self) -> &Path;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message for a module.
    fn step(&self, module: &str, message: &str);
    /// Relay one line of tool output for a module.
    fn output(&self, module: &str, line: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
