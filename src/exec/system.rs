use crate::error::{ReleaseError, Result};
use crate::exec::{CommandOutput, CommandRunner, Invocation};
use crate::preflight;
use std::process::{Command, Stdio};

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).current_dir(&invocation.cwd);

        if invocation.capture {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());

            let output = cmd
                .output()
                .map_err(|e| spawn_error(&invocation.program, e))?;

            Ok(CommandOutput {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        } else {
            let status = cmd
                .status()
                .map_err(|e| spawn_error(&invocation.program, e))?;

            Ok(CommandOutput {
                code: status.code(),
                ..CommandOutput::default()
            })
        }
    }
}

fn spawn_error(program: &str, err: std::io::Error) -> ReleaseError {
    if err.kind() == std::io::ErrorKind::NotFound {
        preflight::missing_tool(program)
    } else {
        ReleaseError::Io(err)
    }
}
