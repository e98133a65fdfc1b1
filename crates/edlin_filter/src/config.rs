//! Configuration for filter child processes.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

/// Shell used when none is configured.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// How long a filter may run before it is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment inheritance strategy applied to filter processes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvironmentPolicy {
    /// Clear the environment and pass only the inherited `PATH`.
    #[default]
    PathOnly,
    /// Inherit the full environment unchanged.
    InheritAll,
}

/// Where the child's standard error goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorOutput {
    /// Share the editor's stderr so the user sees diagnostics.
    #[default]
    Inherit,
    /// Discard it.
    Discard,
}

impl ErrorOutput {
    pub(crate) fn stdio(self) -> Stdio {
        match self {
            Self::Inherit => Stdio::inherit(),
            Self::Discard => Stdio::null(),
        }
    }
}

/// Configuration for the filter bridge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    /// The shell that runs the command string (`<shell> -c <command>`).
    pub shell: PathBuf,

    /// Upper bound on the whole round trip; `None` waits forever.
    pub timeout: Option<Duration>,

    /// Which environment variables the child sees.
    pub environment: EnvironmentPolicy,

    /// Fail the filter when the child exits unsuccessfully.
    pub require_success: bool,

    /// Destination of the child's stderr.
    pub stderr: ErrorOutput,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            timeout: Some(DEFAULT_TIMEOUT),
            environment: EnvironmentPolicy::default(),
            require_success: false,
            stderr: ErrorOutput::default(),
        }
    }
}

impl FilterConfig {
    /// Builder method to set the shell.
    #[must_use]
    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Builder method to set the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder method to set the environment policy.
    #[must_use]
    pub const fn with_environment(mut self, environment: EnvironmentPolicy) -> Self {
        self.environment = environment;
        self
    }

    /// Builder method to enable/disable failing on non-zero exit.
    #[must_use]
    pub const fn with_require_success(mut self, require: bool) -> Self {
        self.require_success = require;
        self
    }

    /// Builder method to set where child stderr goes.
    #[must_use]
    pub const fn with_stderr(mut self, stderr: ErrorOutput) -> Self {
        self.stderr = stderr;
        self
    }
}
