//! Error types for JSON Lines output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing records.
#[derive(Error, Debug)]
pub enum JsonlPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO error while writing a specific output file.
    #[error("Failed to write file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Target directory is missing.
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Target path exists but is not a directory.
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
