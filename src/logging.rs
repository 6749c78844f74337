//! Diagnostic logging.
//!
//! Logs go to stderr without ANSI codes so they never interleave with the
//! transcript on stdout. The filter comes from `RUST_LOG`, then `CRO_LOG`,
//! then the configured level raised by `-v` flags.

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::CroError;

/// Environment variable read after `RUST_LOG`.
pub const LOG_ENV: &str = "CRO_LOG";

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Raise `base` by `verbosity` steps, saturating at `trace`.
///
/// Unknown level names are treated as `warn`.
#[must_use]
pub fn effective_level(base: &str, verbosity: u8) -> &'static str {
    let base = base.trim().to_ascii_lowercase();
    let start = LEVELS.iter().position(|&l| l == base).unwrap_or(1);
    LEVELS[(start + usize::from(verbosity)).min(LEVELS.len() - 1)]
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`CroError::Config`] if the level is not a valid filter or a
/// subscriber is already installed.
pub fn init(level: &str, verbosity: u8) -> Result<(), CroError> {
    let fallback = effective_level(level, verbosity);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .or_else(|_| EnvFilter::try_new(fallback))
        .map_err(|e| CroError::Config(format!("Invalid log filter: {e}")))?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .map_err(|e| CroError::Config(format!("Failed to initialize logging: {e}")))?;

    debug!(fallback, "logging initialized");
    Ok(())
}
