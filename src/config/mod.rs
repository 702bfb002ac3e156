//! Load and validate the user settings file.
use std::{env, fs, path::Path, path::PathBuf};

use serde::Deserialize;
use tracing::{debug, error, info};

use crate::errors::ConfigError;

pub mod debugger;

pub use debugger::{parse_debugger_section, DebugSettings, RawDebuggerSection};

pub const CONFIG_ENV_KEY: &str = "KIDO_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
struct RawSettingsFile {
    debugger: Option<RawDebuggerSection>,
}

impl DebugSettings {
    /// Prefer `KIDO_CONFIG_PATH` if set; otherwise read `config.toml`,
    /// tolerating its absence.
    pub fn load_from_env_or_default() -> Result<Self, ConfigError> {
        match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => Self::load_from_path(PathBuf::from(value)),
            _ => Self::load_optional(Path::new(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Load settings from an implicit path, falling back to empty
    /// settings when the file does not exist. An unset settings store is
    /// a normal state for the host, not an error.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(
                target: "kido_debug::config",
                path = %path.display(),
                "No settings file; using empty settings"
            );
            return Ok(Self::default());
        }
        Self::load_from_path(path.to_path_buf())
    }

    /// Load settings from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "kido_debug::config",
            path = %path.display(),
            "Starting settings load"
        );

        let contents = fs::read_to_string(&path).map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "kido_debug::config",
                path = %path.display(),
                reason = %error,
                "Failed to read settings file"
            );
            error
        })?;

        let raw: RawSettingsFile = toml::from_str(&contents).map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "kido_debug::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse settings file"
            );
            error
        })?;

        let settings = parse_debugger_section(&path, raw.debugger).map_err(|err| {
            error!(
                target: "kido_debug::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate settings file"
            );
            err
        })?;

        debug!(
            target: "kido_debug::config",
            path = %path.display(),
            config_type = settings.config_type.as_deref().unwrap_or(""),
            targets = settings.target_arguments.len(),
            overrides = settings.overrides.len(),
            "Loaded settings"
        );
        Ok(settings)
    }
}
