use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while loading or validating the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("Failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Field failed validation.
    #[error("Settings file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `io::Error` as a read failure.
    pub fn from_read_error(path: PathBuf, source: io::Error) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `toml::de::Error` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: toml::de::Error) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures while handing a launch request to the host debugging service.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Failed to encode launch request: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write launch request to the host: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}
