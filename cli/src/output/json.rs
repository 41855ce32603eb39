//! JSON output helpers.
//!
//! Provides `JsonRenderer` and the error-object formatter used by all
//! `--json` code paths when a command fails.

use anyhow::{Context, Result};
use serde::Serialize;
use terracotta_common::{OrderReport, RunSummary};

use crate::domain::{ConfigError, GraphError};

/// Context attached when the configuration file cannot be loaded.
pub const LOAD_CONFIG_CONTEXT: &str = "Failed to load config";

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice — `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

fn print_pretty(value: &impl Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

/// Renders report types as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print_pretty(&serde_json::json!({ "version": version }))
    }

    /// Render the resolved execution order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_order(&self, report: &OrderReport) -> Result<()> {
        print_pretty(report)
    }

    /// Render a plan/apply run summary.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_summary(&self, summary: &RunSummary) -> Result<()> {
        print_pretty(summary)
    }
}

/// Machine-readable code for a failed command.
///
/// - `config_error`: the config could not be loaded or failed validation
/// - `order_error`: a cycle or unknown dependency
/// - `error`: anything else
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<GraphError>().is_some() {
        "order_error"
    } else if err.downcast_ref::<ConfigError>().is_some()
        || err.chain().any(|c| c.to_string() == LOAD_CONFIG_CONTEXT)
    {
        "config_error"
    } else {
        "error"
    }
}
