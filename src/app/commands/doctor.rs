//! Read-only project health report.

use std::path::Path;

use serde::Serialize;

use crate::app::AppContext;
use crate::app::commands::start;
use crate::domain::layout::{self, SCAFFOLD_DIRS, SYSTEM_CONFIG};
use crate::domain::{AppError, CredentialStatus, Readiness};
use crate::ports::{EnvironmentReader, ProcessRunner, ProjectStore};

/// State of `config/system_config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConfigStatus {
    Missing,
    Valid,
    Invalid { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    pub readiness: Readiness,
    pub venv_dir: String,
    pub interpreter_present: bool,
    pub credentials: CredentialStatus,
    pub missing_dirs: Vec<String>,
    pub missing_entry_points: Vec<String>,
    pub system_config: ConfigStatus,
}

impl DoctorReport {
    /// 0 when the next `start` would dispatch without setup or guards.
    pub fn exit_code(&self) -> i32 {
        if self.readiness.is_ready() && self.interpreter_present { 0 } else { 1 }
    }
}

pub fn execute<S, P, E>(ctx: &AppContext<S, P, E>) -> Result<DoctorReport, AppError>
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    let store = ctx.store();
    let config = ctx.config();

    let missing_dirs = SCAFFOLD_DIRS
        .iter()
        .filter(|dir| !store.is_dir(Path::new(dir)))
        .map(|dir| dir.to_string())
        .collect();

    let missing_entry_points = [&config.main_entry, &config.monitor_entry]
        .into_iter()
        .filter(|path| !store.exists(path))
        .map(|path| path.display().to_string())
        .collect();

    Ok(DoctorReport {
        readiness: start::readiness(ctx),
        venv_dir: config.venv_dir.display().to_string(),
        interpreter_present: store.exists(&layout::venv_interpreter(&config.venv_dir)),
        credentials: CredentialStatus::check(|key| ctx.env().var(key)),
        missing_dirs,
        missing_entry_points,
        system_config: check_system_config(store)?,
    })
}

fn check_system_config<S: ProjectStore>(store: &S) -> Result<ConfigStatus, AppError> {
    let path = Path::new(SYSTEM_CONFIG);
    if !store.exists(path) {
        return Ok(ConfigStatus::Missing);
    }
    let content = store.read_file(path)?;
    Ok(match serde_yaml::from_str::<serde_yaml::Value>(&content) {
        Ok(_) => ConfigStatus::Valid,
        Err(e) => ConfigStatus::Invalid { error: e.to_string() },
    })
}
