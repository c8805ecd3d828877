//! Error types for snapshot generation

use std::path::PathBuf;
use thiserror::Error;

/// Fatal snapshot errors. Everything else degrades to empty output.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The agents root could not be listed
    #[error("cannot read agents directory {}: {source}", .path.display())]
    AgentsRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The snapshot file could not be written
    #[error("cannot write snapshot to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for clawdash-core
pub type Result<T> = std::result::Result<T, SnapshotError>;
