//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;
use crate::domain::DEFAULT_CONFIG_FILE;

/// Run Terraform modules in dependency order
#[derive(Parser)]
#[command(
    name = "terracotta",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the module configuration file
    ///
    /// A relative `base_path` inside the file is resolved against the
    /// directory holding the file, not the current directory.
    #[arg(
        short,
        long,
        global = true,
        env = "TERRACOTTA_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plan every module in dependency order
    Plan(commands::plan::PlanArgs),

    /// Apply every module in dependency order, stopping at the first failure
    ///
    /// Asks for confirmation first. Without a terminal the prompt fails;
    /// pass --yes, or set CI or TERRACOTTA_YES, to apply unattended.
    Apply(commands::apply::ApplyArgs),

    /// Show the resolved execution order
    Order,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or ordered, or
    /// if output cannot be rendered. Module failures are reported through the
    /// returned exit code instead.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            config,
            json,
            quiet,
            no_color,
            yes,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes },
            config,
        });

        match command {
            Command::Plan(args) => commands::plan::run(&app, &args).await,
            Command::Apply(args) => commands::apply::run(&app, &args).await,
            Command::Order => commands::order::run(&app),
            Command::Version => commands::version::run(&app),
        }
    }
}
