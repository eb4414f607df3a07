//! Configuration
//!
//! Every run is driven by an explicit [`SummaryConfig`]. The library never
//! consults the current working directory or the environment; the binary
//! resolves the project root once and hands it in.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for one summary run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Project root: traversal starts here and relative paths are computed from it
    pub root: PathBuf,

    /// Ignore file consulted first
    #[serde(default = "default_project_ignore_file")]
    pub project_ignore_file: String,

    /// Ignore file consulted only when the project ignore file is absent
    #[serde(default = "default_vcs_ignore_file")]
    pub vcs_ignore_file: String,

    /// JSON manifest embedded under `project`
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// File the summary is written to, inside the root
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Extension (without the dot) identifying sidecar description files
    #[serde(default = "default_metadata_extension")]
    pub metadata_extension: String,
}

fn default_project_ignore_file() -> String {
    ".projectignore".to_string()
}

fn default_vcs_ignore_file() -> String {
    ".gitignore".to_string()
}

fn default_manifest_file() -> String {
    "package.json".to_string()
}

fn default_output_file() -> String {
    "projectSummary.json".to_string()
}

fn default_metadata_extension() -> String {
    "metadata".to_string()
}

impl SummaryConfig {
    /// Configuration with default file names for the given root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            project_ignore_file: default_project_ignore_file(),
            vcs_ignore_file: default_vcs_ignore_file(),
            manifest_file: default_manifest_file(),
            output_file: default_output_file(),
            metadata_extension: default_metadata_extension(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_file)
    }
}
