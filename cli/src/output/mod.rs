//! Terminal and JSON presentation.
//!
//! `OutputContext` owns styling and the quiet flag; renderers and the
//! progress reporter print through it.

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::{OwoColorize as _, Style};
use terracotta_common::{OrderReport, RunSummary};

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Styling and verbosity for human output.
pub struct OutputContext {
    pub styles: Styles,
    /// stdout is a terminal; spinners and colors need one.
    pub is_tty: bool,
    /// `--quiet`: only errors and bare results are printed.
    pub quiet: bool,
}

impl OutputContext {
    /// Colors are enabled only on a terminal without `--no-color`/`NO_COLOR`.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let mut styles = Styles::default();
        if is_tty && !no_color && std::env::var_os("NO_COLOR").is_none() {
            styles.colorize();
        }
        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    fn marked(&self, mark: &str, style: Style, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", mark.style(style));
        }
    }

    pub fn success(&self, msg: &str) {
        self.marked("✓", self.styles.success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.marked("⚠", self.styles.warning, msg);
    }

    /// Written to stderr, even when quiet.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    pub fn info(&self, msg: &str) {
        self.marked("ℹ", self.styles.info, msg);
    }

    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// `key  value` with the key dimmed.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Renderer selected by the output mode.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Renderer::Json(r) => r.render_version(version),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_order(&self, report: &OrderReport, config_path: &Path) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_order(report, config_path);
                Ok(())
            }
            Renderer::Json(r) => r.render_order(report),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_summary(&self, summary: &RunSummary) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_summary(summary);
                Ok(())
            }
            Renderer::Json(r) => r.render_summary(summary),
        }
    }
}
