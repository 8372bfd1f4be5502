//! Child process execution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// A child process to run with inherited stdio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
    /// Variables set on top of the inherited environment.
    pub env: Vec<(String, OsString)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>, cwd: &Path) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: cwd.to_path_buf(), env: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn envs(mut self, vars: Vec<(String, OsString)>) -> Self {
        self.env.extend(vars);
        self
    }

    /// Arguments as lossy UTF-8, for logs and assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    /// Shell-like rendering for messages.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args_lossy());
        parts.join(" ")
    }
}

/// Exit status of a finished child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus(i32);

impl ProcessStatus {
    pub fn from_code(code: i32) -> Self {
        Self(code)
    }

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn success(self) -> bool {
        self.0 == 0
    }
}

/// Port for spawning external programs.
pub trait ProcessRunner {
    /// Run to completion. `Err` only when the process could not be started.
    fn run(&self, spec: &CommandSpec) -> Result<ProcessStatus, AppError>;

    /// Locate an executable on the search path.
    fn find_program(&self, name: &str) -> Option<PathBuf>;
}
