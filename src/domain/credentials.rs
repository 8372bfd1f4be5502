//! Provider credential presence check.

use serde::Serialize;

/// Variables the downstream system reads its provider keys from.
pub const CREDENTIAL_VARS: [&str; 2] = ["OPENAI_API_KEY", "ANTHROPIC_API_KEY"];

/// Which credential variables are set to a non-empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialStatus {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

impl CredentialStatus {
    /// Check each credential through `lookup`. Values are never inspected
    /// beyond being non-empty.
    pub fn check<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (present, missing): (Vec<&str>, Vec<&str>) = CREDENTIAL_VARS
            .into_iter()
            .partition(|name| lookup(*name).is_some_and(|value| !value.is_empty()));

        Self {
            present: present.into_iter().map(str::to_string).collect(),
            missing: missing.into_iter().map(str::to_string).collect(),
        }
    }

    /// True when no provider key is available at all.
    pub fn is_degraded(&self) -> bool {
        self.present.is_empty()
    }
}
