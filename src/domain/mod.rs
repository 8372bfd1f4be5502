pub mod config;
pub mod credentials;
pub mod error;
pub mod identities;
pub mod layout;
pub mod packages;
pub mod python_env;
pub mod readiness;
pub mod routing;

pub use config::LauncherConfig;
pub use credentials::{CREDENTIAL_VARS, CredentialStatus};
pub use error::AppError;
pub use identities::GroupId;
pub use packages::{PackageCatalog, PackageGroup};
pub use python_env::PythonEnvironment;
pub use readiness::Readiness;
pub use routing::{EntryPoint, Invocation};
