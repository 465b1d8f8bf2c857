//! Infrastructure implementation of the `ConfigStore` port.

use std::os::unix::fs::MetadataExt;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::{CONFIG_PATH, GatewayConfig};

/// Group- or world-writable permission bits.
const FOREIGN_WRITE_BITS: u32 = 0o022;

/// Loads [`GatewayConfig`] from a YAML file that only its owner can change.
pub struct SystemConfigStore {
    path: PathBuf,
    owner: u32,
}

impl SystemConfigStore {
    /// The production store: [`CONFIG_PATH`], owned by root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(CONFIG_PATH),
            owner: 0,
        }
    }

    /// A store for an arbitrary file and required owner uid.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>, owner: u32) -> Self {
        Self {
            path: path.into(),
            owner,
        }
    }
}

impl Default for SystemConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for SystemConfigStore {
    fn load(&self) -> Result<GatewayConfig> {
        let path = &self.path;
        let meta = match std::fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(GatewayConfig::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("cannot stat {}", path.display()));
            }
        };

        if !meta.file_type().is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }
        if meta.uid() != self.owner {
            anyhow::bail!(
                "{} must be owned by uid {} (found uid {})",
                path.display(),
                self.owner,
                meta.uid()
            );
        }
        if meta.mode() & FOREIGN_WRITE_BITS != 0 {
            anyhow::bail!(
                "{} must not be writable by group or others (mode {:o})",
                path.display(),
                meta.mode() & 0o7777
            );
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }
}
