//! aisys: bootstrap and launch the Advanced AI System.
//!
//! `setup` provisions a Python virtual environment and project layout,
//! `start` routes command-line flags to the system's Python entry points,
//! and `doctor` reports whether the next `start` would dispatch.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ConfigStatus, DoctorReport, HookOutcome, InstallReport, Readiness, ScaffoldReport,
    SetupOptions, SetupReport, doctor, doctor_at, setup, setup_at, start, start_at,
};
pub use domain::AppError;
