//! `terracotta apply` — apply every module in dependency order.
//!
//! Stops at the first failed module; the rest are reported as skipped.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::domain::Action;

/// Arguments for the apply command.
#[derive(Args)]
pub struct ApplyArgs {
    /// AWS profile exported to terraform as AWS_PROFILE
    #[arg(long)]
    pub profile: Option<String>,

    /// Per-step timeout in seconds (default: 3600)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Run the apply command.
pub async fn run(app: &AppContext, args: &ApplyArgs) -> Result<ExitCode> {
    let prepared = super::prepare(app)?;

    let modules: Vec<&str> = prepared.order.iter().map(|m| m.path.as_str()).collect();
    let prompt = format!(
        "Apply {} module(s) in this order: {}?",
        modules.len(),
        modules.join(" → ")
    );
    if !app.confirm(&prompt, true)? {
        app.output.info("Apply cancelled.");
        return Ok(ExitCode::SUCCESS);
    }

    let executor = app.executor(args.profile.clone(), args.timeout.map(Duration::from_secs));
    super::run_and_report(app, &executor, &prepared, Action::Apply).await
}
