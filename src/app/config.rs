//! Launcher configuration loading from the project.

use std::path::Path;

use crate::domain::config::parse_config_content;
use crate::domain::layout::LAUNCHER_CONFIG;
use crate::domain::{AppError, LauncherConfig};
use crate::ports::{EnvironmentReader, ProjectStore};

/// Overrides the interpreter used to create the virtual environment.
pub const PYTHON_ENV: &str = "AISYS_PYTHON";
/// Overrides the virtual environment directory.
pub const VENV_DIR_ENV: &str = "AISYS_VENV_DIR";

/// Load `aisys.toml` if present, then apply environment overrides.
pub fn load_config<S, E>(store: &S, env: &E) -> Result<LauncherConfig, AppError>
where
    S: ProjectStore,
    E: EnvironmentReader,
{
    let path = Path::new(LAUNCHER_CONFIG);
    let config = if store.exists(path) {
        let content = store.read_file(path)?;
        parse_config_content(&content).map_err(|e| {
            AppError::config_error(format!("Invalid {}: {}", LAUNCHER_CONFIG, e))
        })?
    } else {
        LauncherConfig::default()
    };

    Ok(config.with_overrides(env.var(PYTHON_ENV), env.var(VENV_DIR_ENV)))
}
