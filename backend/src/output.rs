//! Diagnostics written to the caller's error channel.
//!
//! The GUI merges stderr into its log and looks for lines starting with
//! [`ERROR_PREFIX`] to tell gateway failures apart from apt's own output.

use crate::domain::GatewayError;

/// Tag on every gateway-origin diagnostic line.
pub const ERROR_PREFIX: &str = "[NANO_BACKEND_ERROR]";

/// Render `err` as one prefixed line (without the trailing newline).
#[must_use]
pub fn format_error(err: &GatewayError) -> String {
    format!("{ERROR_PREFIX} {err}")
}

/// Write `err` to stderr.
pub fn report(err: &GatewayError) {
    eprintln!("{}", format_error(err));
}
