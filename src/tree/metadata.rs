//! Sidecar descriptions for files
//!
//! A file `foo.txt` may carry a description in `foo.txt.metadata`. The
//! sidecar's text is stored verbatim; nothing parses or validates it.

use crate::error::SummaryError;
use crate::tree::fs::FileSystem;
use crate::tree::node::Node;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Path of the sidecar for `path`: the full file name plus `.{extension}`.
pub fn sidecar_path(path: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// File name with its last extension removed (`foo.txt` -> `foo`).
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Build the node for a file, attaching its sidecar description if one exists.
pub fn read_file_node(
    fs: &dyn FileSystem,
    path: &Path,
    extension: &str,
) -> Result<Node, SummaryError> {
    let name = display_name(path);
    let sidecar = sidecar_path(path, extension);

    if !fs.exists(&sidecar) {
        return Ok(Node::file(name));
    }

    let summary = fs.read_text(&sidecar)?;
    trace!(path = %path.display(), "Attached sidecar description");
    Ok(Node::described_file(name, summary))
}
