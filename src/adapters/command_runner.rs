use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{CapturedOutput, ToolInvocation, ToolRunner};

/// Runs tools as child processes of the wizard.
#[derive(Debug, Clone, Default)]
pub struct CommandToolRunner;

impl CommandToolRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &ToolInvocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd);
        command
    }

    fn spawn_error(invocation: &ToolInvocation, err: std::io::Error) -> AppError {
        if err.kind() == std::io::ErrorKind::NotFound && !invocation.program.exists() {
            return AppError::ToolNotFound(invocation.program.clone());
        }
        AppError::ToolFailed { tool: invocation.program.display().to_string(), details: err.to_string() }
    }
}

/// Exit code of a finished child; signals count as failure.
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

impl ToolRunner for CommandToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<i32, AppError> {
        debug!(command = %invocation, cwd = %invocation.cwd.display(), "running tool");
        let status = Self::command(invocation)
            .status()
            .map_err(|e| Self::spawn_error(invocation, e))?;
        Ok(exit_code(status))
    }

    fn capture(&self, invocation: &ToolInvocation) -> Result<CapturedOutput, AppError> {
        debug!(command = %invocation, cwd = %invocation.cwd.display(), "capturing tool output");
        let output = Self::command(invocation)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        Ok(CapturedOutput {
            code: exit_code(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        })
    }
}
