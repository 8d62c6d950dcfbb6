//! Snapshot loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a route progress snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Failed to read the snapshot file.
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or does not match the model.
    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
