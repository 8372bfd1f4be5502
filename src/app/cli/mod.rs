//! CLI Adapter.

mod doctor;
mod setup;
mod start;

use std::ffi::OsString;

use crate::app::logging::init_logging;
use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aisys")]
#[command(version)]
#[command(
    about = "Provision and launch the Advanced AI System",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the virtual environment, install packages, scaffold directories and templates
    #[clap(visible_alias = "s")]
    Setup {
        /// Do not run pip
        #[arg(long)]
        skip_install: bool,
        /// Do not install pre-commit hooks
        #[arg(long)]
        skip_hooks: bool,
    },
    /// Start the system: --monitor, --report, --interactive, or arguments for the main entry point
    #[clap(visible_alias = START_ALIAS)]
    #[command(disable_help_flag = true)]
    Start {
        /// Arguments routed to the Python entry points
        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_parser = clap::value_parser!(OsString)
        )]
        args: Vec<OsString>,
    },
    /// Report whether the project is ready to start
    #[clap(visible_alias = "d")]
    Doctor {
        /// Output format
        #[arg(long, value_enum, default_value_t = doctor::DoctorFormat::Text)]
        format: doctor::DoctorFormat,
    },
}

const START_COMMAND: &str = "start";
const START_ALIAS: &str = "r";

/// Arguments after the `start` token, exactly as the OS passed them.
///
/// clap swallows a leading `--`; the dispatcher must see it.
fn start_tail(raw: &[OsString]) -> Option<Vec<OsString>> {
    raw.iter()
        .skip(1)
        .position(|arg| arg == START_COMMAND || arg == START_ALIAS)
        .map(|index| raw[index + 2..].to_vec())
}

/// Entry point for the CLI.
pub fn run() {
    let raw: Vec<OsString> = std::env::args_os().collect();
    let cli = Cli::parse_from(raw.iter().cloned());

    if let Err(e) = init_logging() {
        eprintln!("Warning: {}", e);
    }

    let result: Result<i32, AppError> = match cli.command {
        Commands::Setup { skip_install, skip_hooks } => {
            setup::run_setup(skip_install, skip_hooks).map(|_| 0)
        }
        Commands::Start { args } => start::run_start(start_tail(&raw).unwrap_or(args)),
        Commands::Doctor { format } => doctor::run_doctor(format),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
