//! CLI error types.

use thiserror::Error;
use turnbanner::config::ConfigError;
use turnbanner::logging::LoggingError;
use turnbanner::route::SnapshotError;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded, edited or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A route progress snapshot could not be read.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Logging could not be initialized.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// Failed to serialize output.
    #[error("Failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Snapshot(_) => 3,
            CliError::Logging(_) | CliError::Json(_) => 1,
        }
    }
}
