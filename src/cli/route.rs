//! CLI route: run context built from parsed arguments. Dispatches to the summary writer.

use crate::config::SummaryConfig;
use crate::summary::generate_summary;
use crate::tree::fs::OsFileSystem;
use crate::tree::path::canonicalize_root;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::parse::Cli;

/// Runtime context for one CLI invocation: the resolved configuration.
#[derive(Debug, Clone)]
pub struct RunContext {
    config: SummaryConfig,
}

impl RunContext {
    /// Resolve the project root from the parsed arguments.
    ///
    /// `cwd` is supplied by the caller so that nothing below `main` reads
    /// process-wide state.
    pub fn new(cli: &Cli, cwd: &Path) -> anyhow::Result<Self> {
        let requested = match &cli.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        };
        let root = canonicalize_root(&requested)
            .with_context(|| format!("Cannot resolve project root {}", requested.display()))?;
        debug!(root = %root.display(), "Resolved project root");

        Ok(Self {
            config: SummaryConfig::new(root),
        })
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Generate the summary on the real filesystem. Returns the path written.
    pub fn execute(&self) -> anyhow::Result<PathBuf> {
        generate_summary(&OsFileSystem, &self.config).with_context(|| {
            format!(
                "Failed to generate project summary for {}",
                self.config.root.display()
            )
        })
    }
}
