use std::fs;
use std::path::{Path, PathBuf};

use crate::model::AppConfig;

/// Default config filename, looked up in the current directory
pub const CONFIG_FILE: &str = "tomo.toml";

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError { path: PathBuf, source: toml::de::Error },
}

/// Load configuration from the given path, or from `tomo.toml` in the
/// current directory when `path` is `None`. A missing file is not an error;
/// defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            if !default.exists() {
                return Ok(AppConfig::default());
            }
            default
        }
    };

    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError { path, source: e })
}
