//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::cli`, or `crate::output`.

use anyhow::Result;

use crate::domain::{ExecutionResult, GatewayConfig};

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` with exactly `args` and exactly `env`, inheriting
    /// stdout/stderr, and wait for it to terminate.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        env: &[(String, String)],
    ) -> Result<ExecutionResult>;
}

/// The single up-front privilege check.
pub trait PrivilegeGate {
    /// `true` when the process already holds the identity required to drive
    /// the package manager.
    fn is_privileged(&self) -> bool;
}

/// Loads the gateway configuration.
pub trait ConfigStore {
    /// # Errors
    ///
    /// Returns an error if the configuration exists but cannot be trusted,
    /// read or parsed.
    fn load(&self) -> Result<GatewayConfig>;
}
