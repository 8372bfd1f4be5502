//! Shared testing utilities for aisys CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project and a fake Python interpreter.
///
/// The fake interpreter appends each invocation to `python.log` and, for
/// `-m venv DIR`, installs a copy of itself as `DIR/bin/python`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    python: PathBuf,
    log_file: PathBuf,
    env_log: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("python.log");
        let env_log = root.path().join("python-env.log");
        let python = bin_dir.join("python3");

        let script = format!(
            r#"#!/bin/sh
echo "$*" >> "{log}"
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    mkdir -p "$3/bin"
    cp "$0" "$3/bin/python"
    exit 0
fi
if [ "$1" = "-m" ]; then
    exit 0
fi
echo "VIRTUAL_ENV=$VIRTUAL_ENV" >> "{env_log}"
echo "PYTHONPATH=$PYTHONPATH" >> "{env_log}"
echo "PATH=$PATH" >> "{env_log}"
exit "${{FAKE_PYTHON_EXIT:-0}}"
"#,
            log = log_file.display(),
            env_log = env_log.display(),
        );
        fs::write(&python, script).expect("Failed to write fake python");
        let mut perms = fs::metadata(&python).expect("fake python metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&python, perms).expect("Failed to mark fake python executable");

        Self { root, work_dir, python, log_file, env_log }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// The fake interpreter passed as `AISYS_PYTHON`.
    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Build a command for invoking the compiled `aisys` binary in the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("aisys").expect("Failed to locate aisys binary");
        cmd.current_dir(&self.work_dir)
            .env("AISYS_PYTHON", &self.python)
            .env("PATH", "/usr/bin:/bin")
            .env("AISYS_LOG", "info")
            .env_remove("AISYS_VENV_DIR")
            .env_remove("AISYS_LOG_FORMAT")
            .env_remove("PYTHONPATH")
            .env_remove("VIRTUAL_ENV")
            .env_remove("FAKE_PYTHON_EXIT")
            .env_remove("OPENAI_API_KEY")
            .env_remove("ANTHROPIC_API_KEY");
        cmd
    }

    /// Run `aisys setup` without pip or hooks.
    pub fn setup_quick(&self) {
        self.cli().args(["setup", "--skip-install", "--skip-hooks"]).assert().success();
    }

    /// Provision the project and write a `.env` so `start` dispatches directly.
    pub fn ready(&self) {
        self.setup_quick();
        self.write_file(".env", "OPENAI_API_KEY=sk-test\n");
        self.clear_log();
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read file")
    }

    /// Invocations of the fake interpreter, one line each.
    pub fn python_calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Raw bytes of the invocation log, for arguments that are not UTF-8.
    pub fn python_log_bytes(&self) -> Vec<u8> {
        fs::read(&self.log_file).unwrap_or_default()
    }

    /// Environment seen by the last entry-point invocation.
    pub fn child_env(&self, key: &str) -> Option<String> {
        let content = fs::read_to_string(&self.env_log).ok()?;
        let prefix = format!("{}=", key);
        content.lines().rev().find_map(|line| line.strip_prefix(&prefix).map(str::to_string))
    }

    pub fn clear_log(&self) {
        let _ = fs::remove_file(&self.log_file);
        let _ = fs::remove_file(&self.env_log);
    }
}
