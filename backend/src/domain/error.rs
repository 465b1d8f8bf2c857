//! Typed domain error enum.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, or `std::process`. Every variant's `Display` text is
//! the diagnostic the GUI shows after the `[NANO_BACKEND_ERROR]` prefix.

use thiserror::Error;

/// Exit code reported for every gateway-origin failure.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Every way an invocation can fail before or while running the package manager.
///
/// A child that exits non-zero is not represented here: its code is
/// propagated verbatim as an [`ExecutionResult`](crate::domain::ExecutionResult).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("nano_backend must be run with root privileges (e.g., via sudo).")]
    InsufficientPrivilege,

    #[error("{0}")]
    UsageError(String),

    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("Invalid package name {0:?}: {1}")]
    InvalidPackageName(String, &'static str),

    #[error("Invalid .deb path {0:?}: {1}")]
    InvalidDebPath(String, &'static str),

    #[error("Failed to start {program}: {reason}")]
    SpawnFailure { program: String, reason: String },

    #[error("{program} was terminated by signal {signal}")]
    ChildAbnormalTermination { program: String, signal: i32 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// Process exit code for this failure. Always `1`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// Usage line shown for arity violations.
    #[must_use]
    pub fn usage() -> Self {
        Self::UsageError(USAGE.to_string())
    }
}

/// One-line summary of the invocation contract.
pub const USAGE: &str = "Usage: nano_backend <apt-op <install|purge> <package/path> [--reinstall] \
     | apt-autoremove | apt-update | apt-upgrade | apt-fix-broken | apt-clean>";
