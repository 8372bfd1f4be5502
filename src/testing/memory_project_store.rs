use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::domain::AppError;
use crate::ports::ProjectStore;

#[derive(Default)]
struct State {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

/// In-memory project store. Clones share state.
#[derive(Clone)]
pub struct MemoryProjectStore {
    root: PathBuf,
    state: Rc<RefCell<State>>,
}

impl Default for MemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MemoryProjectStore {
    pub fn new() -> Self {
        Self { root: PathBuf::from("/project"), state: Rc::default() }
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.add_dir(Path::new(path));
        self
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.put_file(Path::new(path), content);
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.state.borrow().files.get(Path::new(path)).cloned()
    }

    pub fn dirs(&self) -> Vec<PathBuf> {
        self.state.borrow().dirs.iter().cloned().collect()
    }

    fn add_dir(&self, path: &Path) {
        let mut state = self.state.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    fn put_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.state.borrow_mut().files.insert(path.to_path_buf(), content.to_string());
    }
}

impl ProjectStore for MemoryProjectStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.borrow();
        state.dirs.contains(path) || state.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.borrow().dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.add_dir(path);
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.state.borrow().files.get(path).cloned().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.put_file(path, content);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        let content = self.read_file(from)?;
        self.put_file(to, &content);
        Ok(())
    }
}
