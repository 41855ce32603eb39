//! Per-invocation state shared by every command.
//!
//! Built once from the global flags in `cli.rs`; commands take `&AppContext`
//! and ask it for renderers, reporters, executors and confirmations.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::terraform::TerraformExecutor;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Environment variable that skips confirmation prompts, like `--yes`.
pub const YES_ENV: &str = "TERRACOTTA_YES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    /// One JSON document on stdout; progress is not printed.
    Json,
}

/// `--no-color`, `--quiet` and `--json`.
pub struct OutputFlags {
    pub no_color: bool,
    pub quiet: bool,
    pub json: bool,
}

/// `--yes`.
pub struct BehaviourFlags {
    pub yes: bool,
}

/// Global flags as parsed by clap.
pub struct AppFlags {
    pub output: OutputFlags,
    pub behaviour: BehaviourFlags,
    /// Module file given by `--config` or `TERRACOTTA_CONFIG`.
    pub config: PathBuf,
}

pub struct AppContext {
    pub output: OutputContext,
    pub mode: OutputMode,
    /// Where the module declarations are read from.
    pub config_store: YamlConfigStore,
    /// Answer prompts with their default instead of asking.
    ///
    /// Set by `--yes`, or when `CI` or `TERRACOTTA_YES` is present in the
    /// environment.
    pub non_interactive: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let env_yes = std::env::var_os("CI").is_some() || std::env::var_os(YES_ENV).is_some();
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store: YamlConfigStore::new(&flags.config),
            non_interactive: flags.behaviour.yes || env_yes,
        }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self.mode, OutputMode::Json)
    }

    /// Renderer for order and run reports in the selected mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        if self.is_json() {
            Renderer::Json(JsonRenderer)
        } else {
            Renderer::Human(HumanRenderer::new(&self.output))
        }
    }

    /// Progress reporter for module runs; silent in JSON mode so stdout
    /// carries only the final document.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        if self.is_json() {
            TerminalReporter::silent(&self.output)
        } else {
            TerminalReporter::new(&self.output)
        }
    }

    /// Terraform executor for one run.
    #[must_use]
    pub fn executor(
        &self,
        aws_profile: Option<String>,
        timeout: Option<Duration>,
    ) -> TerraformExecutor<TokioCommandRunner> {
        let executor = TerraformExecutor::default_runner().with_aws_profile(aws_profile);
        match timeout {
            Some(t) => executor.with_timeout(t),
            None => executor,
        }
    }

    /// Yes/no prompt on the terminal, or `default` when non-interactive.
    ///
    /// # Errors
    ///
    /// Fails when a prompt is needed but no terminal is attached.
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            tracing::debug!(prompt, default, "prompt skipped (non-interactive)");
            return Ok(default);
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .context("cannot prompt for confirmation (pass --yes to skip)")
    }
}
