//! Doctor command implementation.

use clap::ValueEnum;

use crate::app::api::{self, ConfigStatus, DoctorReport};
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DoctorFormat {
    Text,
    Json,
}

pub fn run_doctor(format: DoctorFormat) -> Result<i32, AppError> {
    let report = api::doctor()?;

    match format {
        DoctorFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Configuration(format!("Failed to serialize report: {}", e)))?;
            println!("{}", json);
        }
        DoctorFormat::Text => print_text(&report),
    }

    Ok(report.exit_code())
}

fn print_text(report: &DoctorReport) {
    println!("Readiness: {}", report.readiness.label());
    println!(
        "Virtual environment: {} ({})",
        report.venv_dir,
        if report.interpreter_present { "interpreter found" } else { "interpreter missing" }
    );

    if report.credentials.present.is_empty() {
        println!("⚠️  No API key set ({})", report.credentials.missing.join(", "));
    } else {
        println!("✅ API keys: {}", report.credentials.present.join(", "));
    }

    for dir in &report.missing_dirs {
        println!("⚠️  Missing directory: {}", dir);
    }
    for entry in &report.missing_entry_points {
        println!("⚠️  Missing entry point: {}", entry);
    }

    match &report.system_config {
        ConfigStatus::Missing => println!("⚠️  System configuration not written yet"),
        ConfigStatus::Valid => println!("✅ System configuration parses"),
        ConfigStatus::Invalid { error } => println!("❌ System configuration is invalid: {}", error),
    }
}
