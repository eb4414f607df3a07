//! CLI parse: clap types for project-summary. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Write a JSON summary of a project's manifest and filtered directory tree
#[derive(Parser, Debug)]
#[command(name = "project-summary", version)]
#[command(about = "Summarize a project's manifest and filtered directory tree as JSON")]
pub struct Cli {
    /// Project root directory (defaults to the current directory)
    pub root: Option<PathBuf>,
}
