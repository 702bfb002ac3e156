use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::ConfigError;
use crate::resolver::ArgumentTable;

/// Parsed `[debugger]` section: everything the resolver consumes from
/// user settings.
#[derive(Debug, Clone, Default)]
pub struct DebugSettings {
    /// Preferred backend type; `"codelldb"` forces the CodeLLDB backend.
    pub config_type: Option<String>,
    /// Per-target argument lists with a `"default"` fallback entry.
    pub target_arguments: ArgumentTable,
    /// Free-form fields merged verbatim into the final configuration.
    pub overrides: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawDebuggerSection {
    pub config_type: Option<String>,
    pub target_arguments: Option<BTreeMap<String, Vec<String>>>,
    pub overrides: Option<Map<String, Value>>,
}

/// An absent section is valid: all settings have empty defaults, matching
/// a host whose user never configured debugging.
pub fn parse_debugger_section(
    path: &Path,
    raw: Option<RawDebuggerSection>,
) -> Result<DebugSettings, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DebugSettings::default());
    };

    let config_type = match raw.config_type {
        Some(value) => Some(validate_config_type(path, value)?),
        None => None,
    };

    let target_arguments = raw.target_arguments.unwrap_or_default();
    validate_table_keys(
        path,
        "debugger.target_arguments",
        target_arguments.keys().map(String::as_str),
    )?;

    let overrides = raw.overrides.unwrap_or_default();
    validate_table_keys(
        path,
        "debugger.overrides",
        overrides.keys().map(String::as_str),
    )?;

    Ok(DebugSettings {
        config_type,
        target_arguments: ArgumentTable::new(target_arguments),
        overrides,
    })
}

fn validate_config_type(path: &Path, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "debugger.config_type",
            message: "Backend type cannot be blank".into(),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_table_keys<'a>(
    path: &Path,
    field: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    for key in keys {
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field,
                message: "Keys cannot be blank".into(),
            });
        }
    }
    Ok(())
}
