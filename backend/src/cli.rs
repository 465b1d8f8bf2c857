//! Command Router — clap derive over the closed set of command tokens.
//!
//! clap only selects the token. Operands are taken verbatim from the
//! invocation and handed to [`route`], so nothing the caller supplies after
//! the token is ever interpreted as an option by the parser.

use clap::{Args, Parser, Subcommand};

use crate::domain::{CommandToken, GatewayError, Operation, route};

/// Privileged apt backend for Nano Installer
#[derive(Parser, Debug)]
#[command(
    name = "nano_backend",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true,
    subcommand_required = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install a local .deb or purge a package
    #[command(name = "apt-op", disable_help_flag = true)]
    AptOp(Operands),

    /// Remove packages that are no longer needed
    #[command(name = "apt-autoremove", disable_help_flag = true)]
    AptAutoremove(Operands),

    /// Refresh package lists
    #[command(name = "apt-update", disable_help_flag = true)]
    AptUpdate(Operands),

    /// Upgrade installed packages
    #[command(name = "apt-upgrade", disable_help_flag = true)]
    AptUpgrade(Operands),

    /// Repair broken dependencies
    #[command(name = "apt-fix-broken", disable_help_flag = true)]
    AptFixBroken(Operands),

    /// Clear the package cache
    #[command(name = "apt-clean", disable_help_flag = true)]
    AptClean(Operands),
}

/// Raw operands after the token. Accepted unparsed; arity and content are
/// checked by the domain layer.
#[derive(Args, Debug)]
pub struct Operands {
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub operands: Vec<String>,
}

impl Command {
    #[must_use]
    pub fn token(&self) -> CommandToken {
        match self {
            Self::AptOp(_) => CommandToken::AptOp,
            Self::AptAutoremove(_) => CommandToken::AptAutoremove,
            Self::AptUpdate(_) => CommandToken::AptUpdate,
            Self::AptUpgrade(_) => CommandToken::AptUpgrade,
            Self::AptFixBroken(_) => CommandToken::AptFixBroken,
            Self::AptClean(_) => CommandToken::AptClean,
        }
    }
}

/// Decompose a full invocation (program name first) into an [`Operation`].
///
/// # Errors
///
/// - `UsageError` when no token is given or the token's arity is violated.
/// - `UnknownCommand` when the first token is not one of the six literals.
/// - `InvalidPackageName` / `InvalidDebPath` from target validation.
pub fn parse(args: &[String]) -> Result<Operation, GatewayError> {
    let Some(first) = args.get(1) else {
        return Err(GatewayError::usage());
    };

    let token = match Cli::try_parse_from(args) {
        Ok(cli) => cli.command.token(),
        Err(e) => match CommandToken::from_token(first) {
            // Operands are routed verbatim below, so a parser complaint about
            // them is not the final word.
            Some(token) => {
                tracing::debug!(kind = ?e.kind(), "parser rejected operands");
                token
            }
            None => return Err(GatewayError::UnknownCommand(first.clone())),
        },
    };
    if CommandToken::from_token(first) != Some(token) {
        return Err(GatewayError::UnknownCommand(first.clone()));
    }
    tracing::debug!(token = token.as_str(), operands = args.len() - 2, "routed");

    route(token, &args[2..])
}
