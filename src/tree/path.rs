//! Path canonicalization and root-relative normalization utilities

use crate::error::SummaryError;
use std::path::{Component, Path, PathBuf};

/// Canonicalize a project root given on the command line
///
/// Resolves symlinks, `.` and `..` so that every later relative-path
/// computation starts from the same absolute base. Uses `dunce` so Windows
/// paths stay in their familiar non-UNC form.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, SummaryError> {
    dunce::canonicalize(path).map_err(|e| SummaryError::io(path, e))
}

/// Express `path` relative to `root` using `/` as the only separator
///
/// When `is_dir` is set the result always ends in `/`, so patterns written
/// for directories (`build/`) can match. The root itself maps to `""`
/// (or `"/"` when treated as a directory).
pub fn relative_to_root(root: &Path, path: &Path, is_dir: bool) -> Result<String, SummaryError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        SummaryError::InvalidPath(format!(
            "{} is not under project root {}",
            path.display(),
            root.display()
        ))
    })?;

    let mut normalized = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    // Names containing a literal backslash on Unix still get the canonical form.
    if normalized.contains('\\') {
        normalized = normalized.replace('\\', "/");
    }

    if is_dir && !normalized.ends_with('/') {
        normalized.push('/');
    }

    Ok(normalized)
}
