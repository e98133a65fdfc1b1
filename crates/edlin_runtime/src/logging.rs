//! Log subscriber installation.
//!
//! Events go to stderr so they never mix with listing output on stdout. The
//! default filter only lets warnings through, keeping the prompt quiet.

use std::io::{self, IsTerminal};
use std::sync::OnceLock;

use edlin_foundation::{Error, Result};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{EdlinConfig, LOG_KEY};

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Installs the global `tracing` subscriber for `config.log_filter`.
///
/// Repeated calls after a successful installation do nothing.
///
/// # Errors
///
/// Returns a configuration error if the filter directive is invalid or
/// another global subscriber is already installed.
pub fn init(config: &EdlinConfig) -> Result<()> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|err| Error::config(LOG_KEY, err.to_string()))?;

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .try_init()
        .map_err(|err| Error::config(LOG_KEY, err.to_string()))?;

    drop(INSTALLED.set(()));
    Ok(())
}
