//! `TerminalReporter` — Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → [module] {message}"`; on a TTY a spinner runs
///   until the next event
/// - `output()` prints `"  [module] {line}"`
/// - `success()` prints `"  ✓ {message}"`
/// - `warn()` prints `"  ✗ {message}"`
///
/// Everything is suppressed when `ctx.quiet` or when built with [`silent`].
///
/// [`silent`]: TerminalReporter::silent
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    silent: bool,
    spinner: RefCell<Option<(ProgressBar, String)>>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            silent: ctx.quiet,
            spinner: RefCell::new(None),
        }
    }

    /// A reporter that prints nothing, used for `--json` runs.
    #[must_use]
    pub fn silent(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            silent: true,
            spinner: RefCell::new(None),
        }
    }

    /// Stop a running spinner and print its step line in its place.
    fn settle(&self) {
        if let Some((pb, line)) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
            println!("{line}");
        }
    }

    fn prefix(&self, module: &str) -> String {
        format!("[{module}]").style(self.ctx.styles.module).to_string()
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, module: &str, message: &str) {
        if self.silent {
            return;
        }
        self.settle();
        let line = format!("  {} {} {message}", "→".style(self.ctx.styles.info), self.prefix(module));
        if self.ctx.show_progress() {
            let pb = progress::spinner(&format!("{} {message}", self.prefix(module)));
            *self.spinner.borrow_mut() = Some((pb, line));
        } else {
            println!("{line}");
        }
    }

    fn output(&self, module: &str, line: &str) {
        if self.silent {
            return;
        }
        self.settle();
        println!("  {} {line}", self.prefix(module));
    }

    fn success(&self, message: &str) {
        if self.silent {
            return;
        }
        self.settle();
        println!("  {} {message}", "✓".style(self.ctx.styles.success));
    }

    fn warn(&self, message: &str) {
        if self.silent {
            return;
        }
        self.settle();
        println!("  {} {message}", "✗".style(self.ctx.styles.error));
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        self.settle();
    }
}
