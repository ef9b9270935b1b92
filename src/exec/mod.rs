//! External command abstraction layer
//!
//! Every collaborator this tool drives (the version-control CLI, the build
//! CLI and the release-hosting CLI) is reached through the [CommandRunner]
//! trait, so the release flow can run against a fake in tests.
//!
//! - [system::SystemRunner]: spawns real processes with `std::process::Command`
//! - [mock::MockRunner]: scripted responses, records every invocation
//!
//! ```rust
//! # use transform_release::exec::{check_output, CommandRunner, Invocation};
//! # fn example(runner: &dyn CommandRunner) -> transform_release::Result<()> {
//! let tags = check_output(runner, &Invocation::new("git", ".").arg("tag"))?;
//! for tag in tags.lines() {
//!     println!("{}", tag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use crate::error::{ReleaseError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A single external command: program, arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    /// Arguments, kept as OS strings so paths reach the program unchanged
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
    /// Capture stdout/stderr instead of inheriting the terminal
    pub capture: bool,
}

impl Invocation {
    /// Create an invocation of `program` running inside `cwd`
    pub fn new(program: impl Into<String>, cwd: impl AsRef<Path>) -> Self {
        Invocation {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.as_ref().to_path_buf(),
            capture: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Capture the command's output so the caller can read it
    pub fn captured(mut self) -> Self {
        self.capture = true;
        self
    }

    /// Human readable command line, used in logs and error messages
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|arg| arg.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit status and output of a finished command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
    /// Captured stdout (empty when output was inherited)
    pub stdout: String,
    /// Captured stderr (empty when output was inherited)
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output carrying `stdout`
    pub fn success(stdout: impl Into<String>) -> Self {
        CommandOutput {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        CommandOutput {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands synchronously
///
/// Implementations block until the command finishes. A command that exits
/// non-zero is still `Ok`: the status is reported in [CommandOutput] and
/// turned into an error by [check_call] / [check_output]. `Err` is reserved
/// for commands that could not be started at all.
pub trait CommandRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;
}

/// Run a command and fail unless it exits with status 0
pub fn check_call(runner: &dyn CommandRunner, invocation: &Invocation) -> Result<CommandOutput> {
    tracing::debug!(
        command = %invocation.command_line(),
        cwd = %invocation.cwd.display(),
        "running external command"
    );

    let output = runner.run(invocation)?;
    if !output.is_success() {
        return Err(ReleaseError::ExternalTool {
            command: invocation.command_line(),
            code: output.code,
            stderr: output.stderr,
        });
    }
    Ok(output)
}

/// Run a command with captured output and return its stdout
pub fn check_output(runner: &dyn CommandRunner, invocation: &Invocation) -> Result<String> {
    let invocation = invocation.clone().captured();
    Ok(check_call(runner, &invocation)?.stdout)
}
