//! Reading datasets from disk.

use std::path::Path;

use tracing::{debug, warn};

use super::convert::{convert_dataset, shrines_without_start};
use super::error::DatasetError;
use super::model::Dataset;
use super::types::DatasetDto;

/// Parse a dataset from a JSON string.
pub fn parse_dataset(json: &str) -> Result<Dataset, DatasetError> {
    let dto: DatasetDto = serde_json::from_str(json)?;
    Ok(convert_dataset(&dto)?)
}

/// Load a dataset from a JSON file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_dataset(&contents)?;

    let unstartable = shrines_without_start(&dataset);
    if !unstartable.is_empty() {
        warn!(shrines = ?unstartable, "dataset has shrines without a start time");
    }
    debug!(
        path = %path.display(),
        exterior_pairs = dataset.exterior_count(),
        "loaded dataset"
    );

    Ok(dataset)
}
