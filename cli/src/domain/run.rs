//! Terraform actions and the steps they run per module.
//!
//! Pure functions only. The application layer walks the steps and applies
//! the failure policy; this module only decides what they are.

use std::process::ExitStatus;

use terracotta_common::RunAction;

/// What to do after a module fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and keep going with the next module.
    Continue,
    /// Record the failure and mark every remaining module skipped.
    Stop,
}

/// Action requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `terraform plan`; `upgrade` adds `-upgrade` to `init`.
    Plan { upgrade: bool },
    Apply,
}

/// One terraform invocation for a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Terraform subcommand, used in progress and failure messages.
    pub name: &'static str,
    pub args: Vec<&'static str>,
}

impl Action {
    #[must_use]
    pub fn kind(self) -> RunAction {
        match self {
            Action::Plan { .. } => RunAction::Plan,
            Action::Apply => RunAction::Apply,
        }
    }

    /// Steps run in every module, in order.
    #[must_use]
    pub fn steps(self) -> Vec<Step> {
        let mut init = vec!["init", "-input=false"];
        if let Action::Plan { upgrade: true } = self {
            init.push("-upgrade");
        }
        let main = match self {
            Action::Plan { .. } => Step {
                name: "plan",
                args: vec!["plan", "-input=false"],
            },
            Action::Apply => Step {
                name: "apply",
                args: vec!["apply", "-auto-approve", "-input=false"],
            },
        };
        vec![
            Step {
                name: "init",
                args: init,
            },
            main,
        ]
    }

    /// Plans continue past a failed module; applies stop at the first one.
    #[must_use]
    pub fn failure_policy(self) -> FailurePolicy {
        match self {
            Action::Plan { .. } => FailurePolicy::Continue,
            Action::Apply => FailurePolicy::Stop,
        }
    }
}

/// Describe a non-zero exit for failure messages.
#[must_use]
pub fn describe_exit(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Non-empty lines of captured process output, `stdout` before `stderr`.
///
/// Output captured through one shared pipe arrives entirely in `stdout` and
/// keeps the order it was written in.
#[must_use]
pub fn output_lines(stdout: &[u8], stderr: &[u8]) -> Vec<String> {
    [stdout, stderr]
        .iter()
        .flat_map(|buf| {
            String::from_utf8_lossy(buf)
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
