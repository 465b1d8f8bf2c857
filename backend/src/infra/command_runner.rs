//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` execs the program by path with a discrete argument
//! vector. There is no shell anywhere on this path: each argument reaches the
//! child exactly as given.

use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;
use crate::domain::ExecutionResult;

/// Production `CommandRunner` backed by `tokio::process`.
///
/// The child gets a cleared environment plus exactly the pairs it is given,
/// `/dev/null` as stdin (the caller's stdin carries the sudo password), and
/// the gateway's stdout/stderr so apt progress streams straight to the GUI.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        env: &[(String, String)],
    ) -> Result<ExecutionResult> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .env_clear()
            .envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))?;

        classify(program, status)
    }
}

/// Map a raw wait status onto an [`ExecutionResult`].
fn classify(program: &str, status: ExitStatus) -> Result<ExecutionResult> {
    if let Some(code) = status.code() {
        // Exit codes are 0–255 on Unix; anything else is not a real exit.
        let code = u8::try_from(code).with_context(|| format!("{program} exit code {code}"))?;
        return Ok(ExecutionResult::Exited(code));
    }
    match status.signal() {
        Some(signal) => Ok(ExecutionResult::Signaled(signal)),
        None => anyhow::bail!("{program} ended without an exit code or signal"),
    }
}
