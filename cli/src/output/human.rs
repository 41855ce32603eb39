//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;
use terracotta_common::{ModuleReport, ModuleStatus, OrderReport, RunAction, RunSummary};

use crate::output::OutputContext;

/// Renders report types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("terracotta {version}");
    }

    /// Render the resolved execution order.
    pub fn render_order(&self, report: &OrderReport, config_path: &std::path::Path) {
        if self.ctx.quiet {
            for entry in &report.modules {
                println!("{}", entry.module);
            }
            return;
        }
        println!();
        println!(
            "  {}",
            format!("Execution order ({})", config_path.display()).style(self.ctx.styles.header)
        );
        println!();
        if report.modules.is_empty() {
            self.ctx.info("No modules declared.");
            println!();
            return;
        }
        let width = report.modules.len().to_string().len();
        for entry in &report.modules {
            let deps = if entry.depends_on.is_empty() {
                String::new()
            } else {
                format!(
                    "  {}",
                    format!("← {}", entry.depends_on.join(", ")).style(self.ctx.styles.dim)
                )
            };
            println!("  {:>width$}. {}{deps}", entry.position, entry.module);
        }
        println!();
    }

    /// Render a plan/apply run summary.
    ///
    /// Failed modules go to stderr and are shown even in quiet mode.
    pub fn render_summary(&self, summary: &RunSummary) {
        if !self.ctx.quiet {
            println!();
            self.ctx.header(&format!("{} Summary:", title(summary.action)));
        }
        for report in &summary.modules {
            match report.status {
                ModuleStatus::Success => self
                    .ctx
                    .success(&format!("{}: {}", report.module, success_text(summary.action))),
                ModuleStatus::Failed => self.ctx.error(&failure_line(report)),
                ModuleStatus::Skipped => self.ctx.warn(&format!("{}: skipped", report.module)),
            }
        }
        if !self.ctx.quiet {
            println!();
            self.ctx.kv(
                "Result:",
                &format!(
                    "{} succeeded, {} failed, {} skipped",
                    summary.succeeded(),
                    summary.failed(),
                    summary.skipped()
                ),
            );
        }
    }
}

fn title(action: RunAction) -> &'static str {
    match action {
        RunAction::Plan => "Plan",
        RunAction::Apply => "Apply",
    }
}

/// Success wording per action, e.g. `plan succeeded` / `applied successfully`.
#[must_use]
pub fn success_text(action: RunAction) -> &'static str {
    match action {
        RunAction::Plan => "plan succeeded",
        RunAction::Apply => "applied successfully",
    }
}

/// Summary line for a failed module, e.g. `database: failed - init failed: exit code 1`.
#[must_use]
pub fn failure_line(report: &ModuleReport) -> String {
    match &report.error {
        Some(err) => format!("{}: failed - {err}", report.module),
        None => format!("{}: failed", report.module),
    }
}
