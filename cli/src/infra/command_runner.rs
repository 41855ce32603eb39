//! Infrastructure implementation of the `CommandRunner` port.

use std::io::PipeReader;
use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, Invocation};

/// Default timeout for a single terraform step (init, plan, apply).
pub const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Runs a terraform step as a tokio child process.
///
/// stdout and stderr share one pipe, so the captured output keeps the order
/// lines were written in; it is returned in `Output::stdout` and
/// `Output::stderr` is always empty. The child gets a null stdin so an
/// interactive prompt can never hang a run, and is killed explicitly when the
/// step outlives its timeout.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, invocation: &Invocation<'_>) -> Result<Output> {
        let program = invocation.program;
        let (reader, writer) = std::io::pipe().context("failed to create output pipe")?;
        let stderr_writer = writer
            .try_clone()
            .context("failed to create output pipe")?;

        let mut command = tokio::process::Command::new(program);
        command
            .args(invocation.args)
            .current_dir(invocation.dir)
            .envs(invocation.envs.iter().copied())
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(stderr_writer)
            .kill_on_drop(true);
        let mut child = command.spawn().with_context(|| {
            format!(
                "failed to spawn {program} in {}",
                invocation.dir.display()
            )
        })?;
        // The command still owns our copies of the write end; the reader only
        // sees EOF once they are closed.
        drop(command);

        // Drain the pipe while waiting; terraform output easily exceeds the
        // pipe buffer.
        tokio::select! {
            result = async {
                let (status, combined) = tokio::join!(child.wait(), read_all(reader));
                let combined = combined.with_context(|| format!("reading output of {program}"))?;
                Ok(Output {
                    status: status.with_context(|| format!("waiting for {program}"))?,
                    stdout: combined,
                    stderr: Vec::new(),
                })
            } => result,
            () = tokio::time::sleep(invocation.timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", invocation.timeout.as_secs())
            }
        }
    }
}

/// Read the pipe to EOF without tying up a runtime thread.
#[cfg(unix)]
async fn read_all(reader: PipeReader) -> std::io::Result<Vec<u8>> {
    use tokio::io::AsyncReadExt;

    let mut receiver = tokio::net::unix::pipe::Receiver::from_owned_fd(reader.into())?;
    let mut buf = Vec::new();
    receiver.read_to_end(&mut buf).await?;
    Ok(buf)
}

#[cfg(not(unix))]
async fn read_all(mut reader: PipeReader) -> std::io::Result<Vec<u8>> {
    use std::io::Read;

    tokio::task::spawn_blocking(move || -> std::io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    })
    .await
    .map_err(std::io::Error::other)?
}
