//! Precondition phase run before every dispatch.

use serde::Serialize;

/// Outcome of the precondition check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    /// Environment and `.env` are present.
    Ready,
    /// The virtual environment is missing; setup must run first.
    NeedsSetup,
    /// The environment exists but `.env` does not.
    NeedsConfig,
}

impl Readiness {
    /// Classify from the two existence checks. A missing environment wins
    /// because setup also produces the template `.env` is copied from.
    pub fn assess(venv_present: bool, env_file_present: bool) -> Self {
        match (venv_present, env_file_present) {
            (false, _) => Readiness::NeedsSetup,
            (true, false) => Readiness::NeedsConfig,
            (true, true) => Readiness::Ready,
        }
    }

    pub fn is_ready(self) -> bool {
        self == Readiness::Ready
    }

    pub fn label(self) -> &'static str {
        match self {
            Readiness::Ready => "ready",
            Readiness::NeedsSetup => "needs setup",
            Readiness::NeedsConfig => "needs .env",
        }
    }
}
