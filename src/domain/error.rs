use std::io;

use thiserror::Error;

/// Library-wide error type for aisys operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Package group identifier is invalid.
    #[error("Invalid package group '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidGroupId(String),

    /// Package specifier is invalid.
    #[error("Invalid package '{package}' in group '{group}'")]
    InvalidPackage { group: String, package: String },

    /// Virtual environment creation failed.
    #[error("Failed to create virtual environment at {path}: {details}")]
    EnvironmentCreation { path: String, details: String },

    /// Virtual environment exists but has no interpreter.
    #[error("Python interpreter not found in virtual environment: {0}")]
    InterpreterMissing(String),

    /// Setup was required before dispatch and did not complete.
    #[error("Setup failed: {0}")]
    SetupFailed(Box<AppError>),

    /// `.env` was missing and has been seeded from the template.
    #[error(
        "No {env_file} found. Created it from {template}; edit it with your settings and re-run."
    )]
    EnvFileCreated { env_file: String, template: String },

    /// A child process could not be spawned.
    #[error("Failed to run '{command}': {details}")]
    Process { command: String, details: String },

    /// Template rendering failed.
    #[error("Template error in '{name}': {details}")]
    Template { name: String, details: String },

    /// Path escapes the project root or is otherwise unusable.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

}
