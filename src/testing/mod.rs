mod memory_project_store;
mod recording_runner;
mod static_env;

pub use memory_project_store::MemoryProjectStore;
pub use recording_runner::RecordingRunner;
pub use static_env::StaticEnvironment;
