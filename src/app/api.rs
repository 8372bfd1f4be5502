//! API Facade for the application.
//!
//! Glues context creation to command execution for the real filesystem,
//! process table and environment.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::adapters::{CommandProcessRunner, FilesystemProjectStore, ProcessEnvironment};
use crate::app::{
    AppContext,
    commands::{doctor, setup, start},
};

pub use crate::app::commands::doctor::{ConfigStatus, DoctorReport};
pub use crate::app::commands::setup::{
    HookOutcome, InstallReport, ScaffoldReport, SetupOptions, SetupReport,
};
pub use crate::domain::{AppError, Readiness};

type LiveContext = AppContext<FilesystemProjectStore, CommandProcessRunner, ProcessEnvironment>;

fn create_context(path: PathBuf) -> Result<LiveContext, AppError> {
    AppContext::load(FilesystemProjectStore::new(path), CommandProcessRunner::new(), ProcessEnvironment)
}

/// Run setup in the current directory.
pub fn setup(options: SetupOptions) -> Result<SetupReport, AppError> {
    setup_at(std::env::current_dir()?, options)
}

/// Run setup for the project at `path`.
pub fn setup_at(path: impl Into<PathBuf>, options: SetupOptions) -> Result<SetupReport, AppError> {
    let ctx = create_context(path.into())?;
    setup::execute(&ctx, options)
}

/// Start the system from the current directory.
///
/// Returns the exit code of the Python process.
pub fn start(args: &[OsString]) -> Result<i32, AppError> {
    start_at(std::env::current_dir()?, args)
}

/// Start the system for the project at `path`.
pub fn start_at(path: impl Into<PathBuf>, args: &[OsString]) -> Result<i32, AppError> {
    let ctx = create_context(path.into())?;
    start::execute(&ctx, args)
}

/// Inspect the current directory.
pub fn doctor() -> Result<DoctorReport, AppError> {
    doctor_at(std::env::current_dir()?)
}

/// Inspect the project at `path` without changing it.
pub fn doctor_at(path: impl Into<PathBuf>) -> Result<DoctorReport, AppError> {
    let ctx = create_context(path.into())?;
    doctor::execute(&ctx)
}
