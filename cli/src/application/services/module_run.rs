//! Application service — run an action over every module in order.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All process execution is routed through the injected `ModuleExecutor`.

use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use terracotta_common::{ModuleReport, RunSummary};

use crate::application::ports::{ModuleExecutor, ProgressReporter};
use crate::domain::run::{describe_exit, output_lines};
use crate::domain::{Action, FailurePolicy, ModuleDecl, Step, TerracottaConfig};

/// Run `action` against each module of `order`, sequentially.
///
/// The returned summary has one entry per module, in `order`. Under
/// [`FailurePolicy::Stop`] every module after the first failure is recorded
/// as skipped without being executed.
///
/// This function is infallible — executor errors become failed module
/// entries.
pub async fn run_modules(
    executor: &impl ModuleExecutor,
    reporter: &impl ProgressReporter,
    config: &TerracottaConfig,
    order: &[ModuleDecl],
    action: Action,
) -> RunSummary {
    let started_at = Utc::now();
    let steps = action.steps();
    let mut reports = Vec::with_capacity(order.len());
    let mut stopped = false;

    for module in order {
        if stopped {
            tracing::debug!(module = %module.path, "skipping module after earlier failure");
            reports.push(ModuleReport::skipped(&module.path));
            continue;
        }

        let dir = config.module_dir(&module.path);
        let started = Instant::now();
        let outcome = run_steps(executor, reporter, &module.path, &dir, &steps).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(()) => {
                tracing::info!(module = %module.path, action = %action.kind(), elapsed_ms, "module succeeded");
                reporter.success(&format!("{}: {} succeeded", module.path, action.kind()));
                reports.push(ModuleReport::success(&module.path, elapsed_ms));
            }
            Err(message) => {
                tracing::warn!(module = %module.path, action = %action.kind(), error = %message, "module failed");
                reporter.warn(&format!("{}: {message}", module.path));
                reports.push(ModuleReport::failed(&module.path, message, elapsed_ms));
                if action.failure_policy() == FailurePolicy::Stop {
                    stopped = true;
                }
            }
        }
    }

    RunSummary {
        action: action.kind(),
        modules: reports,
        started_at,
        finished_at: Utc::now(),
    }
}

/// Run each step in `dir`, stopping at the first failed step.
///
/// The error is the user-facing failure message, e.g. `init failed: exit code 1`.
async fn run_steps(
    executor: &impl ModuleExecutor,
    reporter: &impl ProgressReporter,
    module: &str,
    dir: &Path,
    steps: &[Step],
) -> Result<(), String> {
    for step in steps {
        reporter.step(
            module,
            &format!("{} ({})", step.name.to_uppercase(), dir.display()),
        );
        let output = executor
            .run(module, dir, &step.args)
            .await
            .map_err(|e| format!("{} failed: {e:#}", step.name))?;

        for line in output_lines(&output.stdout, &output.stderr) {
            reporter.output(module, &line);
        }
        if !output.status.success() {
            return Err(format!(
                "{} failed: {}",
                step.name,
                describe_exit(output.status)
            ));
        }
    }
    Ok(())
}
