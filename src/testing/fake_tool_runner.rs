use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::{CapturedOutput, ToolInvocation, ToolRunner};

/// Records invocations and replays scripted exit codes.
#[derive(Default)]
pub struct FakeToolRunner {
    pub invocations: RefCell<Vec<ToolInvocation>>,
    exit_codes: RefCell<VecDeque<i32>>,
    captured_stdout: RefCell<String>,
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes returned by successive `run` calls; exhausted queue means success.
    pub fn with_exit_codes(self, codes: &[i32]) -> Self {
        self.exit_codes.borrow_mut().extend(codes);
        self
    }

    pub fn with_stdout(self, stdout: &str) -> Self {
        *self.captured_stdout.borrow_mut() = stdout.to_string();
        self
    }

    pub fn calls(&self) -> Vec<ToolInvocation> {
        self.invocations.borrow().clone()
    }

    /// Arguments of every recorded invocation, joined by spaces.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.borrow().iter().map(|i| i.args.join(" ")).collect()
    }
}

impl ToolRunner for FakeToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<i32, AppError> {
        self.invocations.borrow_mut().push(invocation.clone());
        Ok(self.exit_codes.borrow_mut().pop_front().unwrap_or(0))
    }

    fn capture(&self, invocation: &ToolInvocation) -> Result<CapturedOutput, AppError> {
        self.invocations.borrow_mut().push(invocation.clone());
        let code = self.exit_codes.borrow_mut().pop_front().unwrap_or(0);
        Ok(CapturedOutput { code, stdout: self.captured_stdout.borrow().clone() })
    }
}
