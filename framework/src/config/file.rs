//! Reading and writing config records as TOML or JSON
//!
//! The format is picked from the file extension. Any serde record works;
//! in practice these are [`DatabaseEnvironments`](crate::DatabaseEnvironments)
//! and [`TestSettings`](crate::TestSettings).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// On-disk config formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Render a record in the given format
pub fn to_string<T: Serialize>(format: Format, record: &T) -> Result<String, ConfigError> {
    match format {
        Format::Toml => {
            toml::to_string_pretty(record).map_err(|e| ConfigError::Serialize(e.to_string()))
        }
        Format::Json => {
            serde_json::to_string_pretty(record).map_err(|e| ConfigError::Serialize(e.to_string()))
        }
    }
}

/// Parse a record from text
///
/// `origin` only labels parse errors.
pub fn from_str<T: DeserializeOwned>(
    format: Format,
    text: &str,
    origin: &Path,
) -> Result<T, ConfigError> {
    match format {
        Format::Toml => toml::from_str(text).map_err(|e| ConfigError::parse(origin, e)),
        Format::Json => serde_json::from_str(text).map_err(|e| ConfigError::parse(origin, e)),
    }
}

/// Load a record from a `.toml` or `.json` file
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let record = from_str(format, &text, path)?;
    tracing::debug!(path = %path.display(), ?format, "loaded config file");
    Ok(record)
}

/// Write a record to a `.toml` or `.json` file, creating parent directories
pub fn save<T: Serialize>(path: &Path, record: &T) -> Result<(), ConfigError> {
    let format = Format::from_path(path)?;
    let text = to_string(format, record)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
    }

    fs::write(path, text).map_err(|e| ConfigError::io(path, e))
}
