//! Exclusion decisions for tree entries

use crate::error::SummaryError;
use crate::ignore::IgnorePatterns;
use crate::tree::fs::FileSystem;
use crate::tree::path::relative_to_root;
use std::ffi::OsStr;
use std::path::Path;
use tracing::trace;

/// Decides whether a path is left out of the summary.
///
/// Sidecar files (extension `metadata` by default) are always excluded.
/// Everything else is excluded when its root-relative path matches any
/// ignore pattern.
pub struct PathFilter<'a> {
    fs: &'a dyn FileSystem,
    root: &'a Path,
    patterns: &'a IgnorePatterns,
    metadata_extension: &'a str,
}

impl<'a> PathFilter<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        root: &'a Path,
        patterns: &'a IgnorePatterns,
        metadata_extension: &'a str,
    ) -> Self {
        Self {
            fs,
            root,
            patterns,
            metadata_extension,
        }
    }

    /// Stat `path` and decide whether it is excluded.
    pub fn is_excluded(&self, path: &Path) -> Result<bool, SummaryError> {
        let is_dir = self.fs.is_dir(path)?;
        self.is_excluded_as(path, is_dir)
    }

    /// Decide exclusion when the caller already knows whether `path` is a directory.
    pub fn is_excluded_as(&self, path: &Path, is_dir: bool) -> Result<bool, SummaryError> {
        let relative = relative_to_root(self.root, path, is_dir)?;

        if path.extension() == Some(OsStr::new(self.metadata_extension)) {
            trace!(path = %relative, "Excluding sidecar file");
            return Ok(true);
        }

        let excluded = self.patterns.matches(&relative, is_dir);
        if excluded {
            trace!(path = %relative, "Excluded by ignore pattern");
        }
        Ok(excluded)
    }
}
