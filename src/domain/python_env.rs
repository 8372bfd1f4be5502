//! Activated virtual environment.
//!
//! A shell `activate` script mutates the calling shell. Here the same
//! variables are computed once and applied to each child process.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::layout;

/// A provisioned virtual environment with a usable interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonEnvironment {
    root: PathBuf,
    interpreter: PathBuf,
}

impl PythonEnvironment {
    /// Describe the environment at `venv`. Callers check the interpreter exists.
    pub fn at(venv: PathBuf) -> Self {
        let interpreter = layout::venv_interpreter(&venv);
        Self { root: venv, interpreter }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    pub fn bin_dir(&self) -> PathBuf {
        layout::venv_bin_dir(&self.root)
    }

    /// Variables an activated shell would export.
    ///
    /// `path` and `pythonpath` are the caller's current values. The project
    /// root is appended to the module search path.
    pub fn activation_vars(
        &self,
        project_root: &Path,
        path: Option<OsString>,
        pythonpath: Option<OsString>,
    ) -> Result<Vec<(String, OsString)>, AppError> {
        let mut search_path = vec![self.bin_dir()];
        if let Some(current) = path.as_deref() {
            search_path.extend(env::split_paths(current));
        }

        let mut module_path: Vec<PathBuf> = pythonpath
            .as_deref()
            .map(|current| env::split_paths(current).filter(|p| !p.as_os_str().is_empty()).collect())
            .unwrap_or_default();
        module_path.push(project_root.to_path_buf());

        Ok(vec![
            ("VIRTUAL_ENV".to_string(), self.root.clone().into_os_string()),
            ("PATH".to_string(), join(search_path, "PATH")?),
            ("PYTHONPATH".to_string(), join(module_path, "PYTHONPATH")?),
        ])
    }
}

fn join(paths: Vec<PathBuf>, var: &str) -> Result<OsString, AppError> {
    env::join_paths(paths).map_err(|e| AppError::InvalidPath(format!("Cannot build {}: {}", var, e)))
}
