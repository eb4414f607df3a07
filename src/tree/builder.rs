//! Tree builder for constructing the filtered project tree

use crate::config::SummaryConfig;
use crate::error::SummaryError;
use crate::ignore::IgnorePatterns;
use crate::tree::filter::PathFilter;
use crate::tree::fs::FileSystem;
use crate::tree::metadata::read_file_node;
use crate::tree::node::{DirectoryEntry, Node};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Builds the nested directory representation of a project
///
/// Traversal is depth-first and sequential. Children are visited in the
/// order the [`FileSystem`] lists them. An excluded directory is pruned: it
/// gets no entry and nothing beneath it is evaluated. There is no guard
/// against symlink cycles.
pub struct TreeBuilder<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
    patterns: &'a IgnorePatterns,
    metadata_extension: String,
}

impl<'a> TreeBuilder<'a> {
    /// Create a new tree builder for the given root path
    pub fn new(
        fs: &'a dyn FileSystem,
        root: impl Into<PathBuf>,
        patterns: &'a IgnorePatterns,
    ) -> Self {
        Self {
            fs,
            root: root.into(),
            patterns,
            metadata_extension: "metadata".to_string(),
        }
    }

    /// Create a tree builder using the root and sidecar extension from `config`
    pub fn from_config(
        fs: &'a dyn FileSystem,
        config: &SummaryConfig,
        patterns: &'a IgnorePatterns,
    ) -> Self {
        Self {
            fs,
            root: config.root.clone(),
            patterns,
            metadata_extension: config.metadata_extension.clone(),
        }
    }

    /// Build the tree for the whole project
    ///
    /// The root itself is never tested against the ignore patterns.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<DirectoryEntry, SummaryError> {
        let start = Instant::now();
        debug!(pattern_count = self.patterns.patterns().len(), "Starting tree build");

        let tree = self.build_directory(&self.root)?;

        debug!(
            node_count = tree.node_count(),
            duration_ms = start.elapsed().as_millis(),
            "Tree build completed"
        );
        Ok(tree)
    }

    /// Build the entry for one directory and everything kept beneath it
    fn build_directory(&self, dir: &Path) -> Result<DirectoryEntry, SummaryError> {
        let filter = PathFilter::new(
            self.fs,
            &self.root,
            self.patterns,
            &self.metadata_extension,
        );
        self.walk(dir, &filter)
    }

    fn walk(&self, dir: &Path, filter: &PathFilter<'_>) -> Result<DirectoryEntry, SummaryError> {
        let mut entry = DirectoryEntry::new();

        for name in self.fs.list_children(dir)? {
            let path = dir.join(&name);
            let is_dir = self.fs.is_dir(&path)?;

            if filter.is_excluded_as(&path, is_dir)? {
                continue;
            }

            if is_dir {
                trace!(path = %path.display(), "Descending");
                let child = self.walk(&path, filter)?;
                entry.insert(name, Node::Directory(child));
            } else {
                let node = read_file_node(self.fs, &path, &self.metadata_extension)?;
                entry.insert(name, node);
            }
        }

        Ok(entry)
    }
}

/// Convenience wrapper: build the tree for `config.root`.
pub fn build_tree(
    fs: &dyn FileSystem,
    config: &SummaryConfig,
    patterns: &IgnorePatterns,
) -> Result<DirectoryEntry, SummaryError> {
    let tree = TreeBuilder::from_config(fs, config, patterns).build()?;
    info!(entries = tree.node_count(), "Collected project tree");
    Ok(tree)
}
