//! Startup dispatcher.
//!
//! Ensures the project is set up, then hands the arguments to one of the
//! Python entry points inside the virtual environment.

use std::ffi::OsString;
use std::path::Path;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::commands::setup::{self, SetupOptions, provision, templates};
use crate::domain::layout::{ENV_FILE, ENV_TEMPLATE};
use crate::domain::routing::{self, EntryPoint};
use crate::domain::{AppError, CredentialStatus, Readiness};
use crate::ports::{CommandSpec, EnvironmentReader, ProcessRunner, ProjectStore};

/// Check the two preconditions.
pub fn readiness<S, P, E>(ctx: &AppContext<S, P, E>) -> Readiness
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    Readiness::assess(
        ctx.store().exists(&ctx.config().venv_dir),
        ctx.store().exists(Path::new(ENV_FILE)),
    )
}

/// Dispatch `args` and return the child's exit code.
pub fn execute<S, P, E>(ctx: &AppContext<S, P, E>, args: &[OsString]) -> Result<i32, AppError>
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    if readiness(ctx) == Readiness::NeedsSetup {
        info!("Virtual environment not found; running setup first");
        setup::execute(ctx, SetupOptions::default())
            .map_err(|e| AppError::SetupFailed(Box::new(e)))?;
    }

    if !ctx.store().exists(Path::new(ENV_FILE)) {
        return Err(seed_env_file(ctx)?);
    }

    let environment = provision::activate(ctx)?;

    let credentials = CredentialStatus::check(|key| ctx.env().var(key));
    if credentials.is_degraded() {
        warn!(
            "Neither {} is set; the system will run with limited capabilities",
            credentials.missing.join(" nor ")
        );
    }

    let invocation = routing::route(args);
    let script = match invocation.entry {
        EntryPoint::Main => &ctx.config().main_entry,
        EntryPoint::Monitor => &ctx.config().monitor_entry,
    };

    let vars = environment.activation_vars(
        ctx.store().root(),
        ctx.env().var_os("PATH"),
        ctx.env().var_os("PYTHONPATH"),
    )?;
    let spec = CommandSpec::new(environment.interpreter(), ctx.store().root())
        .arg(script.as_os_str())
        .args(invocation.args)
        .envs(vars);

    info!(entry = invocation.entry.label(), command = %spec.display(), "Starting");
    let status = ctx.runner().run(&spec)?;
    Ok(status.code())
}

/// Copy the template to `.env` and build the error that stops this run.
fn seed_env_file<S, P, E>(ctx: &AppContext<S, P, E>) -> Result<AppError, AppError>
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    let template = Path::new(ENV_TEMPLATE);
    if !ctx.store().exists(template) {
        templates::write_env_template(ctx)?;
    }
    ctx.store().copy_file(template, Path::new(ENV_FILE))?;
    warn!("Created {} from {}", ENV_FILE, ENV_TEMPLATE);

    Ok(AppError::EnvFileCreated { env_file: ENV_FILE.to_string(), template: ENV_TEMPLATE.to_string() })
}
