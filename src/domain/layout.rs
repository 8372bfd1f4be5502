//! Fixed project layout known to the launcher.
//!
//! All paths are relative to the project root.

use std::path::{Path, PathBuf};

/// Default virtual environment directory.
pub const VENV_DIR: &str = "venv";

/// Working environment-variable file. Must exist before dispatch.
pub const ENV_FILE: &str = ".env";

/// Environment-variable template written by setup.
pub const ENV_TEMPLATE: &str = ".env.example";

/// Static system configuration template.
pub const SYSTEM_CONFIG: &str = "config/system_config.yaml";

/// Pre-commit hook configuration.
pub const HOOK_CONFIG: &str = ".pre-commit-config.yaml";

/// Optional launcher configuration.
pub const LAUNCHER_CONFIG: &str = "aisys.toml";

/// Default main entry point.
pub const MAIN_ENTRY: &str = "scripts/run_system.py";

/// Default monitor entry point.
pub const MONITOR_ENTRY: &str = "scripts/monitor.py";

/// Directories created by the scaffolder, in creation order.
pub const SCAFFOLD_DIRS: &[&str] = &[
    "config",
    "logs",
    "logs/system",
    "logs/agents",
    "data",
    "data/memory",
    "data/vector_store",
    "data/knowledge_base",
    "models",
    "outputs",
    "outputs/business_plans",
    "outputs/strategic_reports",
    "outputs/generated_code",
];

/// Storage locations referenced from the system configuration template.
pub mod storage {
    pub const MEMORY: &str = "data/memory";
    pub const VECTOR_STORE: &str = "data/vector_store";
    pub const KNOWLEDGE_BASE: &str = "data/knowledge_base";
    pub const MODELS: &str = "models";
    pub const OUTPUTS: &str = "outputs";
    pub const LOGS: &str = "logs";
}

/// Interpreter location inside a virtual environment.
pub fn venv_interpreter(venv: &Path) -> PathBuf {
    venv_bin_dir(venv).join(interpreter_file_name())
}

/// Executable directory inside a virtual environment.
pub fn venv_bin_dir(venv: &Path) -> PathBuf {
    if cfg!(windows) { venv.join("Scripts") } else { venv.join("bin") }
}

fn interpreter_file_name() -> &'static str {
    if cfg!(windows) { "python.exe" } else { "python" }
}

/// Check that a configured relative path stays inside the project root.
pub fn is_contained(path: &Path) -> bool {
    use std::path::Component;

    if path.as_os_str().is_empty() {
        return false;
    }
    path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
