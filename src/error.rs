//! Error types for project summary generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a summary run.
///
/// Listing, stat, read and write failures all land in [`SummaryError::Io`]
/// with the offending path attached. Manifest problems never surface here;
/// they are downgraded to warnings (see [`ManifestError`]).
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SummaryError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SummaryError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Reasons a manifest could not be embedded in the summary.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("No manifest found at {0}")]
    Missing(PathBuf),

    #[error("Failed to read manifest {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("Failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
