//! Project directory scaffolding.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::AppError;
use crate::domain::layout::SCAFFOLD_DIRS;
use crate::ports::ProjectStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
}

/// Create each scaffold directory that is missing. Never removes anything.
pub fn execute<S: ProjectStore>(store: &S) -> Result<ScaffoldReport, AppError> {
    let mut report = ScaffoldReport::default();

    for dir in SCAFFOLD_DIRS.iter().map(Path::new) {
        if store.is_dir(dir) {
            info!(path = %dir.display(), "Directory exists");
            report.existing.push(dir.to_path_buf());
        } else {
            store.create_dir_all(dir)?;
            info!(path = %dir.display(), "Created directory");
            report.created.push(dir.to_path_buf());
        }
    }

    Ok(report)
}
