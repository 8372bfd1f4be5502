pub mod assets;
pub mod process_command;
pub mod process_env;
pub mod project_filesystem;

pub use assets::EmbeddedAssets;
pub use process_command::CommandProcessRunner;
pub use process_env::ProcessEnvironment;
pub use project_filesystem::FilesystemProjectStore;
