//! Structured logging with tracing
//!
//! Logs go to stderr so ladder output on stdout stays clean. `RUST_LOG`
//! overrides the level passed on the command line.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter from `RUST_LOG`, falling back to `level`
#[must_use]
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init_logging(level: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
