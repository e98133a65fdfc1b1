//! Child process plumbing for filter commands.
//!
//! [`ChildGuard`] owns the spawned shell. On Unix the shell leads its own
//! process group, and dropping the guard without a successful wait kills the
//! whole group and reaps the shell. Commands the shell forked therefore cannot
//! outlive a timeout or keep the pipes open.
//!
//! Stdin and stdout are serviced by two helper threads, so the parent only ever
//! blocks on channels that it waits on with the filter deadline.

use std::env;
use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use edlin_foundation::ProcessError;
#[cfg(unix)]
use nix::sys::signal::{Signal, killpg};
#[cfg(unix)]
use nix::unistd::Pid;
use tracing::{debug, warn};

use crate::config::{EnvironmentPolicy, FilterConfig};

/// Tracing target for filter process operations.
const PROCESS_TARGET: &str = "edlin_filter::process";

/// How often a running child is polled while waiting against a deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A spawned filter child that is always reaped.
#[derive(Debug)]
pub(crate) struct ChildGuard {
    child: Child,
    command: String,
    reaped: bool,
}

impl ChildGuard {
    /// Spawns `<shell> -c <command>` with piped stdin and stdout.
    pub(crate) fn spawn(config: &FilterConfig, command: &str) -> Result<Self, ProcessError> {
        let mut builder = Command::new(&config.shell);
        builder
            .arg("-c")
            .arg(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(config.stderr.stdio());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            builder.process_group(0);
        }

        if config.environment == EnvironmentPolicy::PathOnly {
            builder.env_clear();
            if let Some(path) = env::var_os("PATH") {
                builder.env("PATH", path);
            }
        }

        debug!(
            target: PROCESS_TARGET,
            shell = %config.shell.display(),
            command,
            environment = ?config.environment,
            "spawning filter process"
        );

        let child = builder.spawn().map_err(|source| ProcessError::Spawn {
            shell: config.shell.display().to_string(),
            source,
        })?;

        Ok(Self {
            child,
            command: command.to_owned(),
            reaped: false,
        })
    }

    pub(crate) fn take_stdin(&mut self) -> Result<ChildStdin, ProcessError> {
        self.child
            .stdin
            .take()
            .ok_or(ProcessError::PipeUnavailable { stream: "stdin" })
    }

    pub(crate) fn take_stdout(&mut self) -> Result<ChildStdout, ProcessError> {
        self.child
            .stdout
            .take()
            .ok_or(ProcessError::PipeUnavailable { stream: "stdout" })
    }

    /// Waits for the child to exit, killing it once `deadline` passes.
    pub(crate) fn wait(
        &mut self,
        deadline: Option<Instant>,
        timeout: Duration,
    ) -> Result<ExitStatus, ProcessError> {
        let Some(deadline) = deadline else {
            let status = self.child.wait().map_err(|source| self.wait_error(source))?;
            self.reaped = true;
            return Ok(status);
        };

        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => {
                    self.reaped = true;
                    debug!(target: PROCESS_TARGET, command = %self.command, %status, "filter process exited");
                    return Ok(status);
                }
                Ok(None) if Instant::now() >= deadline => {
                    return Err(self.timed_out(timeout));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(source) => return Err(self.wait_error(source)),
            }
        }
    }

    /// Kills and reaps the child, returning the timeout error to report.
    pub(crate) fn timed_out(&mut self, timeout: Duration) -> ProcessError {
        warn!(
            target: PROCESS_TARGET,
            command = %self.command,
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            "filter timed out, killing process"
        );
        self.kill_and_reap();
        ProcessError::TimedOut {
            command: self.command.clone(),
            timeout,
        }
    }

    fn wait_error(&self, source: io::Error) -> ProcessError {
        ProcessError::Wait {
            command: self.command.clone(),
            source,
        }
    }

    /// Kills every process in the child's group. The unreaped shell keeps the
    /// group id alive until `wait`.
    #[cfg(unix)]
    fn kill_group(&self) {
        let Ok(pgid) = i32::try_from(self.child.id()) else {
            return;
        };
        if let Err(errno) = killpg(Pid::from_raw(pgid), Signal::SIGKILL) {
            debug!(target: PROCESS_TARGET, command = %self.command, %errno, "process group already gone");
        }
    }

    #[cfg(not(unix))]
    #[allow(clippy::unused_self)]
    fn kill_group(&self) {}

    fn kill_and_reap(&mut self) {
        if self.reaped {
            return;
        }
        self.kill_group();
        // Kill fails only when the child already exited; wait reaps either way.
        drop(self.child.kill());
        if let Err(err) = self.child.wait() {
            warn!(target: PROCESS_TARGET, command = %self.command, error = %err, "failed to reap filter process");
        }
        self.reaped = true;
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        self.kill_and_reap();
    }
}

/// Writes `text` and a newline to the child on a helper thread, then closes
/// its stdin.
///
/// A broken pipe means the child exited or closed stdin without consuming the
/// line; that is the child's choice and not an error here.
pub(crate) fn spawn_writer(
    mut stdin: ChildStdin,
    command: &str,
    text: String,
) -> Result<Receiver<Result<(), ProcessError>>, ProcessError> {
    debug!(
        target: PROCESS_TARGET,
        command,
        bytes = text.len() + 1,
        "writing line to filter stdin"
    );

    let (sender, receiver) = mpsc::channel();
    let owned_command = command.to_owned();
    thread::Builder::new()
        .name("edlin-filter-writer".to_owned())
        .spawn(move || {
            let result = stdin
                .write_all(text.as_bytes())
                .and_then(|()| stdin.write_all(b"\n"))
                .and_then(|()| stdin.flush());
            // Closing stdin signals end-of-input.
            drop(stdin);

            let result = match result {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                    debug!(
                        target: PROCESS_TARGET,
                        command = %owned_command,
                        "filter closed stdin before reading all input"
                    );
                    Ok(())
                }
                Err(source) => Err(ProcessError::Write {
                    command: owned_command,
                    source,
                }),
            };
            drop(sender.send(result));
        })
        .map_err(|source| ProcessError::Write {
            command: command.to_owned(),
            source,
        })?;
    Ok(receiver)
}

/// Reports a write failure if the writer thread has already finished with
/// one. A writer still blocked after the child exited is left to hit a broken
/// pipe once the last reader of stdin is gone.
pub(crate) fn check_written(
    receiver: &Receiver<Result<(), ProcessError>>,
) -> Result<(), ProcessError> {
    match receiver.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty | TryRecvError::Disconnected) => Ok(()),
    }
}

/// Reads the child's first output line on a helper thread.
///
/// The thread drops stdout after the first line, so a child that keeps
/// writing sees a broken pipe instead of filling the buffer.
pub(crate) fn spawn_reader(
    stdout: ChildStdout,
    command: &str,
) -> Result<Receiver<io::Result<Vec<u8>>>, ProcessError> {
    let (sender, receiver) = mpsc::channel();
    thread::Builder::new()
        .name("edlin-filter-reader".to_owned())
        .spawn(move || {
            let mut reader = BufReader::new(stdout);
            let mut line = Vec::new();
            let result = reader.read_until(b'\n', &mut line).map(|_| line);
            // The receiver is gone only if the bridge already gave up.
            drop(sender.send(result));
        })
        .map_err(|source| ProcessError::Read {
            command: command.to_owned(),
            source,
        })?;
    Ok(receiver)
}

/// Outcome of waiting on the reader thread.
pub(crate) enum Received {
    Line(Vec<u8>),
    TimedOut,
}

/// Waits for the reader thread's result until `deadline`.
pub(crate) fn receive_line(
    receiver: &Receiver<io::Result<Vec<u8>>>,
    command: &str,
    deadline: Option<Instant>,
) -> Result<Received, ProcessError> {
    let message = match deadline {
        Some(deadline) => {
            match receiver.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                Ok(message) => message,
                Err(RecvTimeoutError::Timeout) => return Ok(Received::TimedOut),
                Err(RecvTimeoutError::Disconnected) => Err(reader_lost()),
            }
        }
        None => receiver.recv().unwrap_or_else(|_| Err(reader_lost())),
    };

    message
        .map(Received::Line)
        .map_err(|source| ProcessError::Read {
            command: command.to_owned(),
            source,
        })
}

fn reader_lost() -> io::Error {
    io::Error::other("output reader stopped unexpectedly")
}
