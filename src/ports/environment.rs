use std::ffi::OsString;

/// Read access to the launcher's own process environment.
pub trait EnvironmentReader {
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Variable as UTF-8; non-UTF-8 values read as absent.
    fn var(&self, key: &str) -> Option<String> {
        self.var_os(key).and_then(|v| v.into_string().ok())
    }
}
