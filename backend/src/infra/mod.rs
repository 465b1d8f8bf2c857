//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! privilege check and configuration loading.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::cli` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod privilege;

pub use command_runner::TokioCommandRunner;
pub use config::SystemConfigStore;
pub use privilege::EffectiveUid;
