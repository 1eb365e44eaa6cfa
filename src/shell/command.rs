//! Shell command execution with a bounded wait.
//!
//! Probe commands come from descriptor files and may hang (an SSO login
//! prompt, an unreachable host). [`execute`] therefore never blocks past
//! [`CommandOptions::timeout`]: the child runs in its own process group and
//! the whole group is killed once the deadline passes.

use crate::error::{CapgateError, Result};
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::platform::ProbeShell;

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Upper bound on reaping a killed child.
const REAP_TIMEOUT: Duration = Duration::from_secs(2);

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: status.code(),
            stdout,
            stderr,
            duration,
            success: status.success(),
        }
    }

    /// Trimmed stdout, falling back to trimmed stderr when stdout is blank.
    pub fn primary_output(&self) -> &str {
        let out = self.stdout.trim();
        if out.is_empty() {
            self.stderr.trim()
        } else {
            out
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Deadline for the whole command (None = wait forever).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options with only a timeout set.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Execute a shell command, capturing stdout and stderr.
///
/// Returns `Ok` for any command that exits on its own, whatever its exit
/// code. Returns [`CapgateError::CommandTimedOut`] when the deadline passes
/// and [`CapgateError::CommandFailed`] when the shell cannot be spawned.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let shell = ProbeShell::system();

    let mut cmd = Command::new(&shell.program);
    cmd.arg(shell.kind.command_flag()).arg(command);

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    tracing::debug!(command, shell = %shell.program.display(), "spawning probe command");

    let mut child = cmd.spawn().map_err(|e| CapgateError::CommandFailed {
        command: command.to_string(),
        message: e.to_string(),
    })?;

    let stdout_reader = spawn_reader(child.stdout.take());
    let stderr_reader = spawn_reader(child.stderr.take());

    let status = match options.timeout {
        Some(timeout) => match wait_with_deadline(&mut child, start + timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                // Readers may still hold pipes inherited by escaped
                // grandchildren; they are detached rather than joined.
                terminate(&mut child);
                tracing::debug!(command, ?timeout, "probe command timed out");
                return Err(CapgateError::CommandTimedOut {
                    command: command.to_string(),
                    timeout_secs: timeout.as_secs(),
                });
            }
            Err(e) => {
                terminate(&mut child);
                return Err(wait_failed(command, e));
            }
        },
        None => child.wait().map_err(|e| wait_failed(command, e))?,
    };

    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();

    Ok(CommandResult::from_status(
        status,
        stdout,
        stderr,
        start.elapsed(),
    ))
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

/// Poll until the child exits or `deadline` passes. `Ok(None)` means timeout.
fn wait_with_deadline(child: &mut Child, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

/// Kill the child's process group and reap the child.
fn terminate(child: &mut Child) {
    #[cfg(unix)]
    {
        if let Ok(pid) = libc::pid_t::try_from(child.id()) {
            // SAFETY: `kill` has no memory-safety preconditions. The child was
            // spawned with `process_group(0)`, so `-pid` names its own group.
            unsafe {
                libc::kill(-pid, libc::SIGKILL);
            }
        }
    }
    let _ = child.kill();

    let reap_deadline = Instant::now() + REAP_TIMEOUT;
    while Instant::now() < reap_deadline {
        match child.try_wait() {
            Ok(Some(_)) | Err(_) => return,
            Ok(None) => thread::sleep(POLL_INTERVAL),
        }
    }
    tracing::warn!(pid = child.id(), "killed probe command did not exit");
}

fn wait_failed(command: &str, e: std::io::Error) -> CapgateError {
    CapgateError::CommandFailed {
        command: command.to_string(),
        message: e.to_string(),
    }
}
