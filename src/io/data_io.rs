use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Dataset;

/// Error type for dataset I/O
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse dataset: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Load a dataset from a JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let text = fs::read_to_string(path).map_err(|e| DataError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let dataset: Dataset = serde_json::from_str(&text)?;
    Ok(dataset)
}

/// Write a dataset as pretty-printed JSON.
pub fn save_dataset(path: &Path, dataset: &Dataset) -> Result<(), DataError> {
    let text = serde_json::to_string_pretty(dataset)?;
    fs::write(path, text)?;
    Ok(())
}
