//! Application service — run one validated operation through the package manager.

use crate::application::ports::CommandRunner;
use crate::domain::{
    CommandVector, ExecutionResult, GatewayError, Operation, PackageManager, child_environment,
};

/// Execute `op` with the package manager `pm`.
///
/// The caller has already passed the privilege gate in
/// [`app::run`](crate::app::run). There are no retries: whatever the child
/// does is reported once.
///
/// `inherited_env` is the gateway's own environment; only the variables
/// allowed by [`child_environment`] reach the child.
///
/// Returns the child's exit code, which the caller propagates verbatim.
///
/// # Errors
///
/// - `SpawnFailure` if the runner cannot start or wait on the child.
/// - `ChildAbnormalTermination` if the child is killed by a signal.
pub async fn execute<I>(
    op: &Operation,
    pm: PackageManager,
    runner: &impl CommandRunner,
    inherited_env: I,
) -> Result<u8, GatewayError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let vector = CommandVector::build(pm, op);
    let env = child_environment(inherited_env);
    let args: Vec<&str> = vector.args().iter().map(String::as_str).collect();

    tracing::debug!(argv = ?vector.to_argv(), "command vector");
    tracing::info!(operation = op.name(), program = vector.program(), "spawning package manager");

    let result = runner
        .run_status(vector.program(), &args, &env)
        .await
        .map_err(|e| GatewayError::SpawnFailure {
            program: vector.program().to_string(),
            reason: format!("{e:#}"),
        })?;

    match result {
        ExecutionResult::Exited(code) => {
            tracing::info!(operation = op.name(), code, "package manager exited");
            Ok(code)
        }
        ExecutionResult::Signaled(signal) => {
            tracing::warn!(operation = op.name(), signal, "package manager killed by signal");
            Err(GatewayError::ChildAbnormalTermination {
                program: vector.program().to_string(),
                signal,
            })
        }
    }
}
