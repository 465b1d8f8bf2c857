//! Domain types for the gateway configuration file.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use serde::{Deserialize, Serialize};

use crate::domain::command::PackageManager;

/// Fixed location of the system configuration. Deliberately not overridable:
/// the caller of the gateway is unprivileged.
pub const CONFIG_PATH: &str = "/etc/nano-installer/backend.yaml";

/// Top-level configuration stored in [`CONFIG_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    /// Package-manager front end: `apt` (default) or `apt-get`.
    pub package_manager: PackageManager,
    /// `tracing` filter directive used when `NANO_BACKEND_LOG` is unset.
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "error".to_string()
}
