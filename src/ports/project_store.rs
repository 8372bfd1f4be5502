//! Project-level filesystem operations.
//!
//! This port provides file I/O scoped to the project root. It does not know
//! which files the launcher manages; that belongs to `domain::layout`.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for filesystem operations relative to the project root.
pub trait ProjectStore {
    /// Absolute project root.
    fn root(&self) -> &Path;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Copy a file, replacing the destination.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the project root.
    fn resolve(&self, path: &Path) -> PathBuf {
        self.root().join(path)
    }
}
