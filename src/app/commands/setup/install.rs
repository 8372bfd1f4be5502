//! Dependency installation into the virtual environment.
//!
//! Each group is one pip call. A failing group is reported and the next
//! group still runs; nothing is rolled back.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, GroupId, PackageGroup, PythonEnvironment};
use crate::ports::{CommandSpec, EnvironmentReader, ProcessRunner, ProjectStore};

/// Per-group outcome of an install run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub pip_upgraded: bool,
    /// Packages across every catalog group.
    pub package_count: usize,
    pub installed: Vec<GroupId>,
    pub failed: Vec<GroupId>,
}

impl InstallReport {
    pub fn is_complete(&self) -> bool {
        self.pip_upgraded && self.failed.is_empty()
    }
}

pub fn execute<S, P, E>(
    ctx: &AppContext<S, P, E>,
    environment: &PythonEnvironment,
) -> Result<InstallReport, AppError>
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    let catalog = ctx.assets().package_catalog()?;
    let mut report = InstallReport { package_count: catalog.package_count(), ..Default::default() };
    info!(
        groups = catalog.groups().len(),
        packages = report.package_count,
        "Installing dependencies"
    );

    info!("Upgrading pip");
    report.pip_upgraded = pip_install(ctx, environment, &["--upgrade", "pip"]);
    if !report.pip_upgraded {
        warn!("pip upgrade failed; continuing with the bundled pip");
    }

    for group in catalog.groups() {
        if install_group(ctx, environment, group) {
            report.installed.push(group.id.clone());
        } else {
            report.failed.push(group.id.clone());
        }
    }

    Ok(report)
}

fn install_group<S, P, E>(
    ctx: &AppContext<S, P, E>,
    environment: &PythonEnvironment,
    group: &PackageGroup,
) -> bool
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    info!(group = %group.id, count = group.packages.len(), "Installing {} packages", group.title);
    let packages: Vec<&str> = group.packages.iter().map(String::as_str).collect();
    let ok = pip_install(ctx, environment, &packages);
    if ok {
        info!(group = %group.id, "{} packages installed", group.title);
    } else {
        warn!(group = %group.id, "{} packages failed to install", group.title);
    }
    ok
}

fn pip_install<S, P, E>(ctx: &AppContext<S, P, E>, environment: &PythonEnvironment, args: &[&str]) -> bool
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    let spec = CommandSpec::new(environment.interpreter(), ctx.store().root())
        .args(["-m", "pip", "install"])
        .args(args.iter().copied());

    match ctx.runner().run(&spec) {
        Ok(status) if status.success() => true,
        Ok(status) => {
            warn!(command = %spec.display(), code = status.code(), "pip exited with failure");
            false
        }
        Err(err) => {
            warn!(error = %err, "pip could not be started");
            false
        }
    }
}
