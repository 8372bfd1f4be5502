use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, layout};
use crate::ports::{CommandSpec, ProcessRunner, ProcessStatus, ProjectStore};
use crate::testing::MemoryProjectStore;

/// Process runner that records every call and returns scripted statuses.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingRunner {
    calls: RefCell<Vec<CommandSpec>>,
    exit_codes: Vec<(String, i32)>,
    spawn_errors: Vec<String>,
    programs: Vec<String>,
    venv_store: Option<MemoryProjectStore>,
}

#[allow(dead_code)]
impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands whose rendering contains `pattern` exit with `code`.
    pub fn exit_with(mut self, pattern: &str, code: i32) -> Self {
        self.exit_codes.push((pattern.to_string(), code));
        self
    }

    /// Commands whose rendering contains `pattern` fail to spawn.
    pub fn spawn_error(mut self, pattern: &str) -> Self {
        self.spawn_errors.push(pattern.to_string());
        self
    }

    /// Report `name` as present on the search path.
    pub fn with_program(mut self, name: &str) -> Self {
        self.programs.push(name.to_string());
        self
    }

    /// Make successful `-m venv <dir>` calls create the interpreter in `store`.
    pub fn creating_venvs_in(mut self, store: MemoryProjectStore) -> Self {
        self.venv_store = Some(store);
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    pub fn call_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(CommandSpec::display).collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<ProcessStatus, AppError> {
        self.calls.borrow_mut().push(spec.clone());
        let line = spec.display();

        if self.spawn_errors.iter().any(|p| line.contains(p.as_str())) {
            return Err(AppError::Process { command: line, details: "not found".to_string() });
        }

        let code = self
            .exit_codes
            .iter()
            .find(|(p, _)| line.contains(p.as_str()))
            .map(|(_, code)| *code)
            .unwrap_or(0);

        let args = spec.args_lossy();
        if code == 0
            && let Some(store) = &self.venv_store
            && let [flag, module, dir] = args.as_slice()
            && flag == "-m"
            && module == "venv"
        {
            store.write_file(&layout::venv_interpreter(Path::new(dir)), "")?;
        }

        Ok(ProcessStatus::from_code(code))
    }

    fn find_program(&self, name: &str) -> Option<PathBuf> {
        self.programs
            .iter()
            .find(|p| p.as_str() == name)
            .map(|p| PathBuf::from("/usr/local/bin").join(p))
    }
}
