//! Nano Installer privileged backend.
//!
//! Runs as root (via sudo) and executes one validated apt operation per
//! invocation on behalf of the unprivileged GUI.

use std::process::ExitCode;

use nano_backend::domain::GatewayError;
use nano_backend::infra::{EffectiveUid, SystemConfigStore, TokioCommandRunner};
use nano_backend::{app, output};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Lossy decoding turns invalid bytes into U+FFFD, which no token or
    // grammar accepts.
    let args: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    match app::run(
        &args,
        &EffectiveUid,
        &SystemConfigStore::new(),
        &TokioCommandRunner,
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
    )
    .await
    {
        Ok(code) => ExitCode::from(code),
        Err(e) => fail(&e),
    }
}

fn fail(err: &GatewayError) -> ExitCode {
    output::report(err);
    ExitCode::from(err.exit_code())
}
