//! Dataset loading error types.

use std::path::PathBuf;

use crate::domain::ShrineName;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A shrine lists travel time to itself
    #[error("shrine {0} has an outgoing time to itself")]
    SelfTravel(ShrineName),
}

/// Errors that can occur when loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Failed to read the dataset file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the dataset JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but is not a valid dataset
    #[error("invalid dataset: {0}")]
    Conversion(#[from] ConversionError),
}
