//! Report output error types.

use std::path::PathBuf;

/// Errors that can occur when writing report files.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Failed to create the output directory
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a report file
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
