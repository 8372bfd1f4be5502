//! Virtual environment provisioning and activation.

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, PythonEnvironment, layout};
use crate::ports::{CommandSpec, EnvironmentReader, ProcessRunner, ProjectStore};

/// Result of provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioned {
    pub environment: PythonEnvironment,
    /// False when the environment already existed.
    pub created: bool,
}

/// Create the virtual environment if absent, then activate it.
pub fn execute<S, P, E>(ctx: &AppContext<S, P, E>) -> Result<Provisioned, AppError>
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    let venv_dir = &ctx.config().venv_dir;
    let created = if ctx.store().exists(venv_dir) {
        info!(path = %venv_dir.display(), "Virtual environment already exists");
        false
    } else {
        info!(path = %venv_dir.display(), python = %ctx.config().python, "Creating virtual environment");
        let spec = CommandSpec::new(&ctx.config().python, ctx.store().root())
            .args(["-m", "venv"])
            .arg(venv_dir.as_os_str());

        let status = ctx.runner().run(&spec).map_err(|e| AppError::EnvironmentCreation {
            path: venv_dir.display().to_string(),
            details: e.to_string(),
        })?;
        if !status.success() {
            return Err(AppError::EnvironmentCreation {
                path: venv_dir.display().to_string(),
                details: format!("'{}' exited with status {}", spec.display(), status.code()),
            });
        }
        true
    };

    Ok(Provisioned { environment: activate(ctx)?, created })
}

/// Resolve the environment's interpreter without creating anything.
pub fn activate<S, P, E>(ctx: &AppContext<S, P, E>) -> Result<PythonEnvironment, AppError>
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    let venv_dir = &ctx.config().venv_dir;
    let interpreter = layout::venv_interpreter(venv_dir);
    if !ctx.store().exists(&interpreter) {
        return Err(AppError::InterpreterMissing(interpreter.display().to_string()));
    }
    Ok(PythonEnvironment::at(ctx.store().resolve(venv_dir)))
}
