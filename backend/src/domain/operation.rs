//! Operations the gateway can perform and the arity contract of each token.
//!
//! Pure functions only — no I/O, no async.

use crate::domain::error::GatewayError;
use crate::domain::target::{DebPath, PackageName, Target};

/// The only optional flag a caller may append to `apt-op`.
pub const REINSTALL_FLAG: &str = "--reinstall";

/// A top-level command token accepted by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandToken {
    AptOp,
    AptAutoremove,
    AptUpdate,
    AptUpgrade,
    AptFixBroken,
    AptClean,
}

impl CommandToken {
    pub const ALL: [Self; 6] = [
        Self::AptOp,
        Self::AptAutoremove,
        Self::AptUpdate,
        Self::AptUpgrade,
        Self::AptFixBroken,
        Self::AptClean,
    ];

    /// The literal token as the caller spells it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AptOp => "apt-op",
            Self::AptAutoremove => "apt-autoremove",
            Self::AptUpdate => "apt-update",
            Self::AptUpgrade => "apt-upgrade",
            Self::AptFixBroken => "apt-fix-broken",
            Self::AptClean => "apt-clean",
        }
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == token)
    }

    /// Minimum and maximum number of operands after the token.
    #[must_use]
    pub fn arity(self) -> (usize, usize) {
        match self {
            // <install|purge> <target> [--reinstall]
            Self::AptOp => (2, 3),
            _ => (0, 0),
        }
    }
}

/// A fully routed and validated request, ready for the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    InstallDeb { path: DebPath, reinstall: bool },
    PurgePackage(PackageName),
    Autoremove,
    Update,
    Upgrade,
    FixBroken,
    Clean,
}

impl Operation {
    /// The validated target, if this operation has one.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::InstallDeb { path, .. } => Some(Target::Deb(path.clone())),
            Self::PurgePackage(name) => Some(Target::Package(name.clone())),
            _ => None,
        }
    }

    /// Short name used in log events.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InstallDeb { .. } => "install",
            Self::PurgePackage(_) => "purge",
            Self::Autoremove => "autoremove",
            Self::Update => "update",
            Self::Upgrade => "upgrade",
            Self::FixBroken => "fix-broken",
            Self::Clean => "clean",
        }
    }
}

/// Turn a selected token and its raw operands into an [`Operation`].
///
/// Arity is checked before any operand content is looked at; the target is
/// validated by its grammar last. Pure and deterministic: the same input
/// always yields the same result.
///
/// # Errors
///
/// Returns `UsageError` for arity violations, an unknown `apt-op` kind or a
/// trailing operand other than `--reinstall`; `InvalidPackageName` /
/// `InvalidDebPath` when the target fails its grammar.
pub fn route(token: CommandToken, operands: &[String]) -> Result<Operation, GatewayError> {
    let (min, max) = token.arity();
    if operands.len() < min || operands.len() > max {
        return Err(GatewayError::usage());
    }

    match token {
        CommandToken::AptOp => route_apt_op(operands),
        CommandToken::AptAutoremove => Ok(Operation::Autoremove),
        CommandToken::AptUpdate => Ok(Operation::Update),
        CommandToken::AptUpgrade => Ok(Operation::Upgrade),
        CommandToken::AptFixBroken => Ok(Operation::FixBroken),
        CommandToken::AptClean => Ok(Operation::Clean),
    }
}

fn route_apt_op(operands: &[String]) -> Result<Operation, GatewayError> {
    let [kind, target, rest @ ..] = operands else {
        return Err(GatewayError::usage());
    };

    let reinstall = match rest {
        [] => false,
        [flag] if flag == REINSTALL_FLAG => true,
        _ => return Err(GatewayError::usage()),
    };

    match kind.as_str() {
        "install" => Ok(Operation::InstallDeb {
            path: DebPath::parse(target)?,
            reinstall,
        }),
        "purge" => Ok(Operation::PurgePackage(PackageName::parse(target)?)),
        other => Err(GatewayError::UsageError(format!(
            "Invalid apt operation: {other:?} (expected install or purge)"
        ))),
    }
}
