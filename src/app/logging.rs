//! Structured logging setup.
//!
//! Logs go to stderr so the delegated process owns stdout.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt};

use crate::domain::AppError;

/// Log filter directive, `tracing` syntax.
pub const LOG_ENV: &str = "AISYS_LOG";
/// `text` (default) or `json`.
pub const LOG_FORMAT_ENV: &str = "AISYS_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

fn parse_format(value: Option<&str>) -> Result<LogFormat, AppError> {
    match value.map(str::trim) {
        None | Some("") | Some("text") => Ok(LogFormat::Text),
        Some("json") => Ok(LogFormat::Json),
        Some(other) => Err(AppError::config_error(format!(
            "Invalid {}: '{}' (expected text or json)",
            LOG_FORMAT_ENV, other
        ))),
    }
}

/// Filter for `directive`, or the default filter and the reason it was rejected.
fn resolve_filter(directive: Option<&str>) -> (EnvFilter, Option<AppError>) {
    match directive.map(str::trim) {
        Some(directive) if !directive.is_empty() => match EnvFilter::try_new(directive) {
            Ok(filter) => (filter, None),
            Err(e) => (
                EnvFilter::new(DEFAULT_FILTER),
                Some(AppError::config_error(format!("Invalid {}: {}", LOG_ENV, e))),
            ),
        },
        _ => (EnvFilter::new(DEFAULT_FILTER), None),
    }
}

/// Install the global subscriber. Safe to call more than once.
///
/// A malformed `AISYS_LOG` or `AISYS_LOG_FORMAT` falls back to the defaults;
/// the subscriber is installed either way and the first problem is returned.
pub fn init_logging() -> Result<(), AppError> {
    let (filter, filter_err) = resolve_filter(std::env::var(LOG_ENV).ok().as_deref());
    let (format, format_err) = match parse_format(std::env::var(LOG_FORMAT_ENV).ok().as_deref()) {
        Ok(format) => (format, None),
        Err(e) => (LogFormat::Text, Some(e)),
    };

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false);

    // A second init fails with "already set"; keep the first subscriber.
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_ansi(std::io::stderr().is_terminal()).try_init(),
    };

    match filter_err.or(format_err) {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
