//! Shell command execution.

use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

use crate::error::{EddyError, Result};

use super::platform::{shell_invocation, Platform};
use super::Shell;

/// Where a child's output streams are forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Copy to this process's stdout/stderr.
    #[default]
    Inherit,
    /// Read and drop.
    Discard,
}

/// Options for the command runner.
#[derive(Debug, Clone, Default)]
pub struct RunnerOptions {
    /// Echo every command line at info level instead of debug.
    pub debug: bool,

    /// Where child output goes.
    pub output: OutputTarget,
}

/// Runs commands through the platform shell.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    options: RunnerOptions,
    platform: Platform,
}

impl ShellRunner {
    /// Create a runner for the current platform.
    pub fn new(options: RunnerOptions) -> Self {
        Self {
            options,
            platform: Platform::current(),
        }
    }

    /// Get the runner options.
    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }
}

impl Shell for ShellRunner {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn run(&self, command: &str) -> Result<()> {
        execute(command, &self.options)
    }
}

/// Substitute each `{}` in `template` with the next argument.
///
/// Arguments are inserted verbatim: shell metacharacters are not escaped.
/// Placeholders without a matching argument are left as `{}`.
pub fn format_command(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Execute one command line and wait for it.
///
/// Both output pipes are drained on their own threads and joined before
/// the child is waited on; a child blocked writing to a full pipe would
/// otherwise never exit.
pub fn execute(command: &str, options: &RunnerOptions) -> Result<()> {
    if options.debug {
        tracing::info!("$ {}", command);
    } else {
        tracing::debug!("$ {}", command);
    }

    let (program, flag) = shell_invocation();
    let mut child = Command::new(program)
        .arg(flag)
        .arg(command)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(command, &e.to_string()))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| spawn_error(command, "stdout was not captured"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| spawn_error(command, "stderr was not captured"))?;

    let stdout_handle = drain(stdout, options.output, Stream::Stdout);
    let stderr_handle = drain(stderr, options.output, Stream::Stderr);

    for (name, handle) in [("stdout", stdout_handle), ("stderr", stderr_handle)] {
        match handle.join() {
            Ok(Ok(bytes)) => tracing::trace!("{} drained {} bytes", name, bytes),
            Ok(Err(e)) => tracing::warn!("Failed reading {} of '{}': {}", name, command, e),
            Err(_) => {
                // Reap the child before bailing so it does not linger.
                let _ = child.wait();
                return Err(spawn_error(command, &format!("{} reader panicked", name)));
            }
        }
    }

    let status = child
        .wait()
        .map_err(|e| spawn_error(command, &e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(EddyError::CommandFailed {
            command: command.to_string(),
            code: status.code(),
        })
    }
}

/// Copy `reader` to the target until end of stream.
///
/// A failing writer is dropped but reading continues, so the child can
/// always make progress.
fn drain<R>(mut reader: R, target: OutputTarget, stream: Stream) -> JoinHandle<io::Result<u64>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut writer: Option<Box<dyn Write>> = match (target, stream) {
            (OutputTarget::Discard, _) => None,
            (OutputTarget::Inherit, Stream::Stdout) => Some(Box::new(io::stdout())),
            (OutputTarget::Inherit, Stream::Stderr) => Some(Box::new(io::stderr())),
        };

        let mut buf = [0u8; 8192];
        let mut total = 0u64;
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            total += n as u64;

            if let Some(w) = writer.as_mut() {
                if w.write_all(&buf[..n]).and_then(|_| w.flush()).is_err() {
                    writer = None;
                }
            }
        }
        Ok(total)
    })
}

fn spawn_error(command: &str, message: &str) -> EddyError {
    EddyError::CommandSpawn {
        command: command.to_string(),
        message: message.to_string(),
    }
}
