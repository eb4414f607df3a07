//! Filesystem access for tree building
//!
//! Traversal never touches `std::fs` directly. Everything goes through the
//! [`FileSystem`] trait so the builder can run against the real disk
//! ([`OsFileSystem`]) or an in-memory fake ([`MemoryFileSystem`]).

use crate::error::SummaryError;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Minimal set of filesystem operations needed to build a summary.
pub trait FileSystem {
    /// Whether anything exists at `path`. Symlinks are followed, so a
    /// dangling link does not exist.
    fn exists(&self, path: &Path) -> bool;

    /// Stat `path` (following symlinks) and report whether it is a directory.
    fn is_dir(&self, path: &Path) -> Result<bool, SummaryError>;

    /// Names of the immediate children of the directory at `path`.
    fn list_children(&self, path: &Path) -> Result<Vec<String>, SummaryError>;

    /// Read the whole file at `path` as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, SummaryError>;

    /// Create or truncate the file at `path` and write `contents`.
    fn write_text(&self, path: &Path, contents: &str) -> Result<(), SummaryError>;
}

/// [`FileSystem`] backed by the operating system.
///
/// Children are listed in byte order of their names so repeated runs over an
/// unchanged tree produce identical output.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> Result<bool, SummaryError> {
        let metadata = fs::metadata(path).map_err(|e| SummaryError::io(path, e))?;
        Ok(metadata.is_dir())
    }

    fn list_children(&self, path: &Path) -> Result<Vec<String>, SummaryError> {
        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut names = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let failed_at = e.path().unwrap_or(path).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk failed"));
                SummaryError::io(failed_at, source)
            })?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn read_text(&self, path: &Path) -> Result<String, SummaryError> {
        fs::read_to_string(path).map_err(|e| SummaryError::io(path, e))
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<(), SummaryError> {
        fs::write(path, contents).map_err(|e| SummaryError::io(path, e))
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, String>,
    /// Directory path to child names, in insertion order.
    dirs: HashMap<PathBuf, Vec<String>>,
    denied: HashSet<PathBuf>,
}

impl MemoryState {
    fn register_child(&mut self, path: &Path) {
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };
        if parent.as_os_str().is_empty() {
            return;
        }
        if !self.dirs.contains_key(parent) {
            self.ensure_dir(parent);
        }
        let name = name.to_string_lossy().into_owned();
        if let Some(children) = self.dirs.get_mut(parent) {
            if !children.contains(&name) {
                children.push(name);
            }
        }
    }

    fn ensure_dir(&mut self, path: &Path) {
        if self.dirs.contains_key(path) {
            return;
        }
        self.dirs.insert(path.to_path_buf(), Vec::new());
        self.register_child(path);
    }

    fn check_access(&self, path: &Path) -> Result<(), SummaryError> {
        if self.denied.contains(path) {
            return Err(SummaryError::io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        Ok(())
    }
}

fn not_found(path: &Path) -> SummaryError {
    SummaryError::io(
        path,
        io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
    )
}

/// In-memory [`FileSystem`] for exercising traversal without touching disk.
///
/// Children are listed in the order they were first added, which lets tests
/// observe that the builder does not reorder entries.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    state: RefCell<MemoryState>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory, creating any missing ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        self.state.borrow_mut().ensure_dir(path.as_ref());
        self
    }

    /// Add (or replace) a file, creating any missing ancestors.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) -> &Self {
        let path = path.as_ref();
        let mut state = self.state.borrow_mut();
        state.files.insert(path.to_path_buf(), contents.to_string());
        state.register_child(path);
        self
    }

    /// Make every operation on `path` fail with `PermissionDenied`.
    pub fn deny(&self, path: impl AsRef<Path>) -> &Self {
        self.state
            .borrow_mut()
            .denied
            .insert(path.as_ref().to_path_buf());
        self
    }

    /// Contents of a file, if present.
    pub fn file_contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.borrow().files.get(path.as_ref()).cloned()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.borrow();
        state.files.contains_key(path) || state.dirs.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> Result<bool, SummaryError> {
        let state = self.state.borrow();
        state.check_access(path)?;
        if state.dirs.contains_key(path) {
            Ok(true)
        } else if state.files.contains_key(path) {
            Ok(false)
        } else {
            Err(not_found(path))
        }
    }

    fn list_children(&self, path: &Path) -> Result<Vec<String>, SummaryError> {
        let state = self.state.borrow();
        state.check_access(path)?;
        match state.dirs.get(path) {
            Some(children) => Ok(children.clone()),
            None if state.files.contains_key(path) => Err(SummaryError::io(
                path,
                io::Error::new(io::ErrorKind::Other, "not a directory"),
            )),
            None => Err(not_found(path)),
        }
    }

    fn read_text(&self, path: &Path) -> Result<String, SummaryError> {
        let state = self.state.borrow();
        state.check_access(path)?;
        state.files.get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<(), SummaryError> {
        {
            let state = self.state.borrow();
            state.check_access(path)?;
            if state.dirs.contains_key(path) {
                return Err(SummaryError::io(
                    path,
                    io::Error::new(io::ErrorKind::Other, "is a directory"),
                ));
            }
        }
        self.add_file(path, contents);
        Ok(())
    }
}
