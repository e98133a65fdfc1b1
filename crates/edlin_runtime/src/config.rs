//! Editor configuration.
//!
//! The editor takes no command-line flags; everything configurable is read
//! once at start-up from `EDLIN_*` environment variables. Unset variables fall
//! back to defaults and malformed values are reported as errors.

use std::env;
use std::time::Duration;

use edlin_filter::{EnvironmentPolicy, FilterConfig};
use edlin_foundation::{Error, Result};

/// Shell used to run filter commands.
pub const SHELL_KEY: &str = "EDLIN_SHELL";
/// Filter timeout in whole seconds; `0` disables it.
pub const TIMEOUT_KEY: &str = "EDLIN_FILTER_TIMEOUT";
/// Filter environment policy: `path` or `inherit`.
pub const ENVIRONMENT_KEY: &str = "EDLIN_FILTER_ENV";
/// Fail filters whose command exits non-zero.
pub const STRICT_KEY: &str = "EDLIN_FILTER_STRICT";
/// Number of prompt history entries kept.
pub const HISTORY_KEY: &str = "EDLIN_HISTORY_SIZE";
/// `tracing` filter directive.
pub const LOG_KEY: &str = "EDLIN_LOG";

/// The prompt shown before every command.
pub const DEFAULT_PROMPT: &str = "edlin> ";
/// Default prompt history size.
pub const DEFAULT_HISTORY_SIZE: usize = 1000;
/// Default log filter.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for an editor session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdlinConfig {
    /// Prompt string.
    pub prompt: String,

    /// Whether to print the banner on start.
    pub banner: bool,

    /// Prompt history size.
    pub history_size: usize,

    /// `tracing` filter directive for the log subscriber.
    pub log_filter: String,

    /// Filter bridge settings.
    pub filter: FilterConfig,
}

impl Default for EdlinConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            history_size: DEFAULT_HISTORY_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            filter: FilterConfig::default(),
        }
    }
}

impl EdlinConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first malformed variable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first malformed variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(shell) = lookup(SHELL_KEY) {
            if shell.trim().is_empty() {
                return Err(Error::config(SHELL_KEY, "must not be empty"));
            }
            config.filter.shell = shell.into();
        }

        if let Some(value) = lookup(TIMEOUT_KEY) {
            let seconds: u64 = parse_number(TIMEOUT_KEY, &value)?;
            config.filter.timeout = (seconds > 0).then(|| Duration::from_secs(seconds));
        }

        if let Some(value) = lookup(ENVIRONMENT_KEY) {
            config.filter.environment = parse_environment(&value)?;
        }

        if let Some(value) = lookup(STRICT_KEY) {
            config.filter.require_success = parse_flag(STRICT_KEY, &value)?;
        }

        if let Some(value) = lookup(HISTORY_KEY) {
            config.history_size = parse_number(HISTORY_KEY, &value)?;
        }

        if let Some(value) = lookup(LOG_KEY) {
            config.log_filter = value;
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::config(key, format!("expected a non-negative integer, got `{value}`")))
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::config(key, format!("expected true or false, got `{value}`"))),
    }
}

fn parse_environment(value: &str) -> Result<EnvironmentPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "path" => Ok(EnvironmentPolicy::PathOnly),
        "inherit" => Ok(EnvironmentPolicy::InheritAll),
        _ => Err(Error::config(
            ENVIRONMENT_KEY,
            format!("expected `path` or `inherit`, got `{value}`"),
        )),
    }
}
