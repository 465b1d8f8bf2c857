//! One invocation, end to end: gate, configure, route, validate, execute.
//!
//! Nothing here reads the process environment or arguments directly;
//! `main` supplies them together with the port implementations.

use crate::application::ports::{CommandRunner, ConfigStore, PrivilegeGate};
use crate::application::services::dispatch;
use crate::cli;
use crate::domain::GatewayError;
use crate::logging;

/// Run the pipeline for `args` (program name first).
///
/// The privilege gate is the first thing checked: an unprivileged caller
/// gets `InsufficientPrivilege` whatever the arguments are, and neither the
/// configuration nor the arguments are looked at.
///
/// Returns the exit code to terminate with: the package manager's own code on
/// a normal exit.
///
/// # Errors
///
/// Any [`GatewayError`]; the caller reports it and exits with
/// [`GatewayError::exit_code`].
pub async fn run<I>(
    args: &[String],
    gate: &impl PrivilegeGate,
    store: &impl ConfigStore,
    runner: &impl CommandRunner,
    inherited_env: I,
) -> Result<u8, GatewayError>
where
    I: IntoIterator<Item = (String, String)>,
{
    if !gate.is_privileged() {
        return Err(GatewayError::InsufficientPrivilege);
    }

    let config = store
        .load()
        .map_err(|e| GatewayError::Config(format!("{e:#}")))?;
    logging::init(&config.log_level);

    let op = cli::parse(args).inspect_err(|e| tracing::warn!(error = %e, "rejected"))?;
    dispatch::execute(&op, config.package_manager, runner, inherited_env).await
}
