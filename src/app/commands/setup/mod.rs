//! One-time project setup: provision, install, scaffold, templates, hooks.

pub mod hooks;
pub mod install;
pub mod provision;
pub mod scaffold;
pub mod templates;

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{EnvironmentReader, ProcessRunner, ProjectStore};

pub use hooks::HookOutcome;
pub use install::InstallReport;
pub use scaffold::ScaffoldReport;

/// Steps that may be turned off from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupOptions {
    pub install_packages: bool,
    pub install_hooks: bool,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self { install_packages: true, install_hooks: true }
    }
}

/// What a setup run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub venv_created: bool,
    /// `None` when installation was skipped.
    pub install: Option<InstallReport>,
    pub scaffold: ScaffoldReport,
    pub written: Vec<PathBuf>,
    pub hooks: HookOutcome,
}

/// Run the full setup pipeline.
///
/// Only provisioning and filesystem errors abort; package and hook
/// failures are recorded in the report.
pub fn execute<S, P, E>(ctx: &AppContext<S, P, E>, options: SetupOptions) -> Result<SetupReport, AppError>
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    info!(root = %ctx.store().root().display(), "Starting setup");

    let provisioned = provision::execute(ctx)?;

    let install = if options.install_packages {
        Some(install::execute(ctx, &provisioned.environment)?)
    } else {
        info!("Skipping package installation");
        None
    };

    let scaffold = scaffold::execute(ctx.store())?;
    let written = templates::execute(ctx)?;

    let hooks = if options.install_hooks {
        hooks::execute(ctx)
    } else {
        HookOutcome::Skipped
    };

    info!("Setup complete");
    Ok(SetupReport { venv_created: provisioned.created, install, scaffold, written, hooks })
}
