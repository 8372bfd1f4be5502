//! Optional pre-commit hook installation. Never fatal.

use std::path::Path;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::layout::HOOK_CONFIG;
use crate::ports::{CommandSpec, EnvironmentReader, ProcessRunner, ProjectStore};

/// Hook manager looked up on the search path.
pub const HOOK_TOOL: &str = "pre-commit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    Installed,
    /// `pre-commit` is not on the search path.
    ToolMissing,
    /// Configuration or registration failed; setup continues.
    Failed(String),
    Skipped,
}

pub fn execute<S, P, E>(ctx: &AppContext<S, P, E>) -> HookOutcome
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    let Some(tool) = ctx.runner().find_program(HOOK_TOOL) else {
        warn!("{} not found on PATH; skipping hook installation", HOOK_TOOL);
        return HookOutcome::ToolMissing;
    };

    let config = match ctx.assets().hook_config() {
        Ok(config) => config,
        Err(err) => return failed(err.to_string()),
    };
    if let Err(err) = ctx.store().write_file(Path::new(HOOK_CONFIG), &config) {
        return failed(err.to_string());
    }
    info!(path = HOOK_CONFIG, "Wrote hook configuration");

    let spec = CommandSpec::new(tool, ctx.store().root()).arg("install");
    match ctx.runner().run(&spec) {
        Ok(status) if status.success() => {
            info!("Pre-commit hooks installed");
            HookOutcome::Installed
        }
        Ok(status) => failed(format!("'{}' exited with status {}", spec.display(), status.code())),
        Err(err) => failed(err.to_string()),
    }
}

fn failed(reason: String) -> HookOutcome {
    warn!(reason = %reason, "Hook installation failed");
    HookOutcome::Failed(reason)
}
