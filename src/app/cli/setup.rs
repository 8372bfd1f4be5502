//! Setup command implementation.

use crate::app::api::{self, HookOutcome, SetupOptions, SetupReport};
use crate::domain::AppError;

pub fn run_setup(skip_install: bool, skip_hooks: bool) -> Result<SetupReport, AppError> {
    let options = SetupOptions { install_packages: !skip_install, install_hooks: !skip_hooks };
    let report = api::setup(options)?;

    if report.venv_created {
        println!("✅ Created virtual environment");
    }
    if let Some(install) = &report.install {
        if install.is_complete() {
            println!("✅ Installed {} package groups", install.installed.len());
        } else {
            let failed: Vec<&str> = install.failed.iter().map(|id| id.as_str()).collect();
            println!("⚠️  Some package groups failed to install: {}", failed.join(", "));
        }
    }
    println!(
        "✅ Project directories ready ({} created, {} existing)",
        report.scaffold.created.len(),
        report.scaffold.existing.len()
    );
    for path in &report.written {
        println!("✅ Wrote {}", path.display());
    }
    match &report.hooks {
        HookOutcome::Installed => println!("✅ Installed pre-commit hooks"),
        HookOutcome::ToolMissing => println!("⚠️  pre-commit not found; hooks not installed"),
        HookOutcome::Failed(reason) => println!("⚠️  Hook installation failed: {}", reason),
        HookOutcome::Skipped => {}
    }
    println!("✅ Setup complete");

    Ok(report)
}
