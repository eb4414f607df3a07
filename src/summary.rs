//! Project summary assembly and persistence
//!
//! One linear pass: load ignore patterns, read the manifest, build the tree,
//! write `projectSummary.json` once. Manifest problems become warnings and
//! the run continues with `{}`. Traversal and write failures propagate and
//! nothing is written.

use crate::config::SummaryConfig;
use crate::error::{ManifestError, SummaryError};
use crate::ignore::{load_ignore_patterns, IgnorePatterns};
use crate::tree::builder::build_tree;
use crate::tree::fs::FileSystem;
use crate::tree::node::DirectoryEntry;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// The document written to the output file.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    /// Parsed manifest, or an empty object when it is missing or malformed
    pub project: Value,
    /// Filtered tree rooted at the project root
    pub structure: DirectoryEntry,
}

impl ProjectSummary {
    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, SummaryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read and parse the manifest at the project root.
pub fn load_manifest(fs: &dyn FileSystem, config: &SummaryConfig) -> Result<Value, ManifestError> {
    let path = config.manifest_path();
    if !fs.exists(&path) {
        return Err(ManifestError::Missing(path));
    }

    let contents = fs.read_text(&path).map_err(|e| ManifestError::Unreadable {
        path: path.clone(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&contents).map_err(|source| ManifestError::Parse { path, source })
}

fn manifest_or_empty(fs: &dyn FileSystem, config: &SummaryConfig) -> Value {
    match load_manifest(fs, config) {
        Ok(manifest) => manifest,
        Err(e) => {
            warn!("{}; using an empty project object", e);
            Value::Object(Map::new())
        }
    }
}

/// Assemble the summary in memory using already-loaded ignore patterns.
fn build_summary_with(
    fs: &dyn FileSystem,
    config: &SummaryConfig,
    patterns: &IgnorePatterns,
) -> Result<ProjectSummary, SummaryError> {
    let project = manifest_or_empty(fs, config);
    let structure = build_tree(fs, config, patterns)?;
    Ok(ProjectSummary { project, structure })
}

/// Assemble the summary in memory without writing it.
pub fn build_summary(
    fs: &dyn FileSystem,
    config: &SummaryConfig,
) -> Result<ProjectSummary, SummaryError> {
    let patterns = load_ignore_patterns(fs, config);
    build_summary_with(fs, config, &patterns)
}

/// Build the summary and write it to the output file, overwriting any
/// previous one. Returns the path written.
#[instrument(skip(fs, config), fields(root = %config.root.display()))]
pub fn generate_summary(
    fs: &dyn FileSystem,
    config: &SummaryConfig,
) -> Result<PathBuf, SummaryError> {
    let summary = build_summary(fs, config)?;
    let rendered = summary.to_json()?;

    let output = config.output_path();
    fs.write_text(&output, &rendered)?;

    info!(path = %output.display(), "Project summary has been generated");
    Ok(output)
}
