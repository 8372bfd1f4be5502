//! Argument routing for the startup dispatcher.
//!
//! The first argument selects one of four cases. Only the exact flags below
//! are recognized; anything else, including `--` and non-UTF-8 values, goes
//! to the main entry point untouched.

use std::ffi::OsString;

/// Routing flag for the live monitor.
pub const MONITOR_FLAG: &str = "--monitor";
/// Routing flag for a monitoring report.
pub const REPORT_FLAG: &str = "--report";
/// Routing flag for interactive mode.
pub const INTERACTIVE_FLAG: &str = "--interactive";

/// Arguments the monitor receives for `--report`.
pub const REPORT_ARGS: [&str; 3] = ["--report", "--duration", "24"];

/// External script an invocation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Main,
    Monitor,
}

impl EntryPoint {
    pub fn label(self) -> &'static str {
        match self {
            EntryPoint::Main => "main",
            EntryPoint::Monitor => "monitor",
        }
    }
}

/// Resolved target and argument list for one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub entry: EntryPoint,
    pub args: Vec<OsString>,
}

/// Map dispatcher arguments to an invocation.
pub fn route(args: &[OsString]) -> Invocation {
    match args.first().and_then(|first| first.to_str()) {
        Some(MONITOR_FLAG) => Invocation { entry: EntryPoint::Monitor, args: Vec::new() },
        Some(REPORT_FLAG) => Invocation {
            entry: EntryPoint::Monitor,
            args: REPORT_ARGS.iter().map(OsString::from).collect(),
        },
        Some(INTERACTIVE_FLAG) => {
            Invocation { entry: EntryPoint::Main, args: vec![OsString::from(INTERACTIVE_FLAG)] }
        }
        _ => Invocation { entry: EntryPoint::Main, args: args.to_vec() },
    }
}
