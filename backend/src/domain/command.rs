//! CommandVector construction and the child environment.
//!
//! Pure functions only — no I/O, no async. Every string in a
//! [`CommandVector`] is either a `&'static str` literal from this module or
//! the text of a validated [`Target`](crate::domain::Target).

use serde::{Deserialize, Serialize};

use crate::domain::operation::{Operation, REINSTALL_FLAG};

/// Front end that keeps apt/dpkg from prompting on a terminal.
pub const NONINTERACTIVE_ENV: (&str, &str) = ("DEBIAN_FRONTEND", "noninteractive");

/// Search path given to the child. Maintainer scripts run by dpkg need one;
/// it is never used to resolve the package manager itself.
pub const CHILD_PATH_ENV: (&str, &str) = ("PATH", "/usr/sbin:/usr/bin:/sbin:/bin");

/// Locale variables copied from the caller so apt output stays localized.
pub const PASSTHROUGH_ENV: &[&str] = &["LANG", "LANGUAGE", "LC_ALL"];

const ASSUME_YES: &str = "-y";

/// The package-manager front end the gateway drives. Each variant maps to a
/// compiled-in absolute path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageManager {
    #[default]
    Apt,
    AptGet,
}

impl PackageManager {
    /// Absolute path of the binary. Never resolved through `PATH`.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Apt => "/usr/bin/apt",
            Self::AptGet => "/usr/bin/apt-get",
        }
    }
}

/// The exact argument vector handed to the package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVector {
    program: &'static str,
    args: Vec<String>,
}

impl CommandVector {
    /// Build the vector for `op`. The target, when present, is always last.
    #[must_use]
    pub fn build(pm: PackageManager, op: &Operation) -> Self {
        let literals: &[&'static str] = match op {
            Operation::InstallDeb {
                reinstall: true, ..
            } => &["install", ASSUME_YES, REINSTALL_FLAG],
            Operation::InstallDeb { .. } => &["install", ASSUME_YES],
            Operation::PurgePackage(_) => &["purge", ASSUME_YES],
            Operation::Autoremove => &["autoremove", ASSUME_YES],
            Operation::Update => &["update"],
            Operation::Upgrade => &["upgrade", ASSUME_YES],
            Operation::FixBroken => &["--fix-broken", "install", ASSUME_YES],
            Operation::Clean => &["clean"],
        };

        let mut args: Vec<String> = literals.iter().map(|s| (*s).to_string()).collect();
        if let Some(target) = op.target() {
            args.push(target.as_str().to_string());
        }

        Self {
            program: pm.path(),
            args,
        }
    }

    /// Absolute path of the program to execute.
    #[must_use]
    pub fn program(&self) -> &'static str {
        self.program
    }

    /// Arguments after the program name.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The full vector, program first.
    #[must_use]
    pub fn to_argv(&self) -> Vec<&str> {
        std::iter::once(self.program)
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

/// Compute the child's environment from the caller's.
///
/// The result always contains the non-interactive front end and the fixed
/// `PATH`; of the caller's variables only [`PASSTHROUGH_ENV`] survive.
#[must_use]
pub fn child_environment<I>(inherited: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut env: Vec<(String, String)> = inherited
        .into_iter()
        .filter(|(key, _)| PASSTHROUGH_ENV.contains(&key.as_str()))
        .collect();
    for (key, value) in [NONINTERACTIVE_ENV, CHILD_PATH_ENV] {
        env.push((key.to_string(), value.to_string()));
    }
    env
}
