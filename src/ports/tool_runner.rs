use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// An external program to run to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ToolInvocation {
    pub fn new(program: impl Into<PathBuf>, cwd: &Path) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: cwd.to_path_buf() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit code and standard output of a captured run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub code: i32,
    pub stdout: String,
}

/// Port for running external tools (vswhere, MSBuild, premake, generator scripts).
pub trait ToolRunner {
    /// Run with inherited stdio and wait; returns the exit code.
    fn run(&self, invocation: &ToolInvocation) -> Result<i32, AppError>;

    /// Run with stdout captured and wait.
    fn capture(&self, invocation: &ToolInvocation) -> Result<CapturedOutput, AppError>;
}
