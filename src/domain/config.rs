//! Launcher configuration model and parser (`aisys.toml`).

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::layout;

/// Default interpreter used to create the virtual environment.
pub const DEFAULT_PYTHON: &str = "python3";

/// Effective launcher settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Interpreter that runs `-m venv`.
    pub python: String,
    /// Virtual environment directory, relative to the project root.
    pub venv_dir: PathBuf,
    pub main_entry: PathBuf,
    pub monitor_entry: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            venv_dir: PathBuf::from(layout::VENV_DIR),
            main_entry: PathBuf::from(layout::MAIN_ENTRY),
            monitor_entry: PathBuf::from(layout::MONITOR_ENTRY),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDto {
    #[serde(default)]
    python: PythonDto,
    #[serde(default)]
    entry_points: EntryPointsDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PythonDto {
    interpreter: Option<String>,
    venv_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryPointsDto {
    main: Option<PathBuf>,
    monitor: Option<PathBuf>,
}

impl LauncherConfig {
    /// Apply overrides from the process environment.
    pub fn with_overrides(mut self, python: Option<String>, venv_dir: Option<String>) -> Self {
        if let Some(python) = python.filter(|v| !v.is_empty()) {
            self.python = python;
        }
        if let Some(dir) = venv_dir.filter(|v| !v.is_empty()) {
            self.venv_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.python.trim().is_empty() {
            return Err(AppError::config_error("python.interpreter must not be empty"));
        }
        for (key, path) in [
            ("python.venv_dir", &self.venv_dir),
            ("entry_points.main", &self.main_entry),
            ("entry_points.monitor", &self.monitor_entry),
        ] {
            if !layout::is_contained(path) {
                return Err(AppError::config_error(format!(
                    "{} must be a relative path inside the project: {}",
                    key,
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

/// Parse launcher configuration from TOML content. Missing keys keep defaults.
pub fn parse_config_content(content: &str) -> Result<LauncherConfig, AppError> {
    let dto: ConfigDto = toml::from_str(content)?;
    let defaults = LauncherConfig::default();

    Ok(LauncherConfig {
        python: dto.python.interpreter.unwrap_or(defaults.python),
        venv_dir: dto.python.venv_dir.unwrap_or(defaults.venv_dir),
        main_entry: dto.entry_points.main.unwrap_or(defaults.main_entry),
        monitor_entry: dto.entry_points.monitor.unwrap_or(defaults.monitor_entry),
    })
}
