mod environment;
mod process_runner;
mod project_store;

pub use environment::EnvironmentReader;
pub use process_runner::{CommandSpec, ProcessRunner, ProcessStatus};
pub use project_store::ProjectStore;
