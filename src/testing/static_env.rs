use std::collections::HashMap;
use std::ffi::OsString;

use crate::ports::EnvironmentReader;

/// Fixed environment for tests.
#[derive(Default, Clone)]
pub struct StaticEnvironment {
    vars: HashMap<String, OsString>,
}

#[allow(dead_code)]
impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), OsString::from(value));
        self
    }
}

impl EnvironmentReader for StaticEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
