//! Infrastructure implementation of the `ModuleExecutor` port.
//!
//! `TerraformExecutor<R>` routes every terraform call through a
//! `CommandRunner`, so tests can inject a recording runner without spawning
//! real processes.

use std::path::Path;
use std::process::Output;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, Invocation, ModuleExecutor};
use crate::infra::command_runner::{DEFAULT_STEP_TIMEOUT, TokioCommandRunner};

/// Environment variable overriding the terraform binary.
pub const TERRAFORM_BIN_ENV: &str = "TERRACOTTA_TERRAFORM_BIN";

const DEFAULT_TERRAFORM_BIN: &str = "terraform";

/// Infrastructure adapter that runs terraform through a `CommandRunner`.
pub struct TerraformExecutor<R: CommandRunner> {
    runner: R,
    binary: String,
    timeout: Duration,
    /// Exported to the child as `AWS_PROFILE`; the parent environment is untouched.
    aws_profile: Option<String>,
}

impl<R: CommandRunner> TerraformExecutor<R> {
    /// Create an executor with an explicit runner and binary.
    pub fn new(runner: R, binary: impl Into<String>) -> Self {
        Self {
            runner,
            binary: binary.into(),
            timeout: DEFAULT_STEP_TIMEOUT,
            aws_profile: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_aws_profile(mut self, profile: Option<String>) -> Self {
        self.aws_profile = profile.filter(|p| !p.is_empty());
        self
    }
}

impl TerraformExecutor<TokioCommandRunner> {
    /// Convenience constructor for production use.
    ///
    /// Honors `TERRACOTTA_TERRAFORM_BIN`, falling back to `terraform` on `PATH`.
    #[must_use]
    pub fn default_runner() -> Self {
        let binary = std::env::var(TERRAFORM_BIN_ENV)
            .ok()
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_TERRAFORM_BIN.to_string());
        Self::new(TokioCommandRunner, binary)
    }
}

impl<R: CommandRunner> ModuleExecutor for TerraformExecutor<R> {
    async fn run(&self, module: &str, dir: &Path, args: &[&str]) -> Result<Output> {
        if !dir.is_dir() {
            anyhow::bail!("module directory {} does not exist", dir.display());
        }

        let envs: Vec<(&str, &str)> = self
            .aws_profile
            .as_deref()
            .map(|p| ("AWS_PROFILE", p))
            .into_iter()
            .collect();

        tracing::info!(
            module,
            dir = %dir.display(),
            "running: {} {}",
            self.binary,
            args.join(" ")
        );
        let started = Instant::now();
        let output = self
            .runner
            .run(&Invocation {
                program: &self.binary,
                args,
                dir,
                envs: &envs,
                timeout: self.timeout,
            })
            .await
            .with_context(|| format!("{} {}", self.binary, args.join(" ")))?;
        tracing::debug!(
            module,
            status = %output.status,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "terraform finished"
        );
        Ok(output)
    }
}
