//! Project Summary: manifest plus filtered directory tree as one JSON document
//!
//! Walks a project root, prunes entries matched by `.projectignore` (or
//! `.gitignore`), attaches `<file>.metadata` sidecar descriptions, and writes
//! `{project, structure}` to `projectSummary.json`.

pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod summary;
pub mod tree;

pub use config::SummaryConfig;
pub use error::{ManifestError, SummaryError};
pub use summary::{build_summary, generate_summary, ProjectSummary};
