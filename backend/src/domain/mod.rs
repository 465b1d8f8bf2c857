//! Domain layer — pure types, routing, validation and vector construction.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod error;
pub mod operation;
pub mod target;

pub use command::{CommandVector, PackageManager, child_environment};
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use operation::{CommandToken, Operation, route};
pub use target::{DebPath, PackageName, Target};

/// Outcome of one package-manager run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Normal exit with the child's own code (0–255).
    Exited(u8),
    /// Killed by the given signal number.
    Signaled(i32),
}
