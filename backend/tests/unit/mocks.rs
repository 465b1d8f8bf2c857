//! Shared mock ports for unit tests.
//!
//! The recording runner captures every call so tests can assert the exact
//! argument vector and environment the gateway would have exec'd.

#![allow(clippy::expect_used)]

use std::cell::RefCell;

use anyhow::Result;
use nano_backend::application::ports::{CommandRunner, ConfigStore, PrivilegeGate};
use nano_backend::domain::{ExecutionResult, GatewayConfig};

// ── Privilege gates ───────────────────────────────────────────────────────────

pub struct Root;

impl PrivilegeGate for Root {
    fn is_privileged(&self) -> bool {
        true
    }
}

pub struct Unprivileged;

impl PrivilegeGate for Unprivileged {
    fn is_privileged(&self) -> bool {
        false
    }
}

// ── Config stores ─────────────────────────────────────────────────────────────

/// Serves a fixed configuration and counts loads.
pub struct FixedConfig {
    config: GatewayConfig,
    pub loads: RefCell<usize>,
}

impl FixedConfig {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            loads: RefCell::new(0),
        }
    }

    pub fn defaults() -> Self {
        Self::new(GatewayConfig::default())
    }

    pub fn load_count(&self) -> usize {
        *self.loads.borrow()
    }
}

impl ConfigStore for FixedConfig {
    fn load(&self) -> Result<GatewayConfig> {
        *self.loads.borrow_mut() += 1;
        Ok(self.config.clone())
    }
}

/// Fails like a root-only config file read without permission.
pub struct UnreadableConfig;

impl ConfigStore for UnreadableConfig {
    fn load(&self) -> Result<GatewayConfig> {
        anyhow::bail!(
            "cannot read /etc/nano-installer/backend.yaml: Permission denied (os error 13)"
        )
    }
}

// ── Runners ──────────────────────────────────────────────────────────────────

/// One captured `run_status` call.
#[derive(Debug, Clone)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl Call {
    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Records calls and answers each with a canned result.
pub struct RecordingRunner {
    result: Option<ExecutionResult>,
    pub calls: RefCell<Vec<Call>>,
}

impl RecordingRunner {
    pub fn exiting(code: u8) -> Self {
        Self {
            result: Some(ExecutionResult::Exited(code)),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn signaled(signal: i32) -> Self {
        Self {
            result: Some(ExecutionResult::Signaled(signal)),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Fails as if the binary could not be spawned.
    pub fn unspawnable() -> Self {
        Self {
            result: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn only_call(&self) -> Call {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls[0].clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        env: &[(String, String)],
    ) -> Result<ExecutionResult> {
        self.calls.borrow_mut().push(Call {
            program: program.to_string(),
            args: args.iter().map(|s| (*s).to_string()).collect(),
            env: env.to_vec(),
        });
        match self.result {
            Some(result) => Ok(result),
            None => anyhow::bail!("failed to spawn {program}: No such file or directory"),
        }
    }
}

/// Turn `&["apt-op", ...]` into a full invocation with a program name.
pub fn invocation(args: &[&str]) -> Vec<String> {
    std::iter::once("nano_backend")
        .chain(args.iter().copied())
        .map(String::from)
        .collect()
}
