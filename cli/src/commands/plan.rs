//! `terracotta plan` — plan every module in dependency order.
//!
//! A failed module does not stop the run; every module is planned and the
//! summary lists each outcome.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::domain::Action;

/// Arguments for the plan command.
#[derive(Args)]
pub struct PlanArgs {
    /// AWS profile exported to terraform as AWS_PROFILE
    #[arg(long)]
    pub profile: Option<String>,

    /// Upgrade providers to the latest allowed version during init
    ///
    /// Announced once per run, before the first module.
    #[arg(long)]
    pub upgrade: bool,

    /// Per-step timeout in seconds (default: 3600)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Run the plan command.
pub async fn run(app: &AppContext, args: &PlanArgs) -> Result<ExitCode> {
    let prepared = super::prepare(app)?;
    if args.upgrade {
        app.output.info("Provider upgrade enabled");
    }
    let executor = app.executor(args.profile.clone(), args.timeout.map(Duration::from_secs));
    super::run_and_report(
        app,
        &executor,
        &prepared,
        Action::Plan {
            upgrade: args.upgrade,
        },
    )
    .await
}
