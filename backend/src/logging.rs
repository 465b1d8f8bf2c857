//! `tracing` subscriber setup.
//!
//! Events go to stderr without ANSI colour, interleaved with apt's output.
//! The default level is quiet enough that a normal run prints nothing extra.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `nano_backend=debug`.
pub const LOG_ENV: &str = "NANO_BACKEND_LOG";

/// Pick the filter: [`LOG_ENV`] wins, then `configured`, then `error`.
#[must_use]
pub fn filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("error"))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(configured: &str) {
    // Fails only when a subscriber is already installed (repeated runs in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(configured))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
