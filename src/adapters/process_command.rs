use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::domain::AppError;
use crate::ports::{CommandSpec, ProcessRunner, ProcessStatus};

/// Runs children with `std::process::Command`, inheriting stdio.
#[derive(Debug, Clone, Default)]
pub struct CommandProcessRunner {
    search_path: Option<OsString>,
}

impl CommandProcessRunner {
    /// Runner that looks programs up on the current `PATH`.
    pub fn new() -> Self {
        Self { search_path: env::var_os("PATH") }
    }

    /// Runner with an explicit search path.
    #[cfg(test)]
    pub(crate) fn with_search_path(search_path: OsString) -> Self {
        Self { search_path: Some(search_path) }
    }
}

impl ProcessRunner for CommandProcessRunner {
    fn run(&self, spec: &CommandSpec) -> Result<ProcessStatus, AppError> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).current_dir(&spec.cwd);
        for (key, value) in &spec.env {
            command.env(key, value);
        }

        let status = command
            .status()
            .map_err(|e| AppError::Process { command: spec.display(), details: e.to_string() })?;

        Ok(ProcessStatus::from_code(exit_code(status)))
    }

    fn find_program(&self, name: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_deref()?;
        env::split_paths(search_path).find_map(|dir| executable_in(&dir, name))
    }
}

fn executable_in(dir: &Path, name: &str) -> Option<PathBuf> {
    let candidate = dir.join(name);
    if is_executable(&candidate) {
        return Some(candidate);
    }
    if cfg!(windows) {
        let exe = dir.join(format!("{}.exe", name));
        if exe.is_file() {
            return Some(exe);
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata().map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Shell convention: a child killed by signal N reports 128 + N.
#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.code().or_else(|| status.signal().map(|signal| 128 + signal)).unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
