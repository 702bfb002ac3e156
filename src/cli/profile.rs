//! ResolveProfile and config/platform/workspace resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};
use crate::host::{HostPlatform, InstalledExtensions, WorkspaceContext};

/// Source for the settings path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

impl ConfigSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Cli => "cli",
            ConfigSource::Env => "env",
            ConfigSource::Default => "default",
        }
    }
}

/// Resolved launch request profile.
#[derive(Debug, Clone)]
pub struct ResolveProfile {
    pub target_name: Option<String>,
    pub target_program: Option<PathBuf>,
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
    pub platform: HostPlatform,
    pub extensions: InstalledExtensions,
    pub workspace: WorkspaceContext,
}

/// Resolve the settings path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigSource::Cli),
        None => match env::var_os(CONFIG_ENV_KEY) {
            Some(value) if !value.is_empty() => (PathBuf::from(value), ConfigSource::Env),
            _ => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default),
        },
    };
    debug!(
        target: "kido_debug::config",
        path = %path.display(),
        source = source.as_str(),
        "Resolved settings path"
    );

    if path.is_absolute() {
        return Ok((path, source));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok((cwd.join(path), source))
}

/// Resolve the platform in the order: host-supplied identifier → detected.
pub fn resolve_platform(override_identifier: Option<&str>) -> HostPlatform {
    match override_identifier {
        Some(identifier) => HostPlatform::from_identifier(identifier),
        None => HostPlatform::detect(),
    }
}

/// Resolve the workspace root in the order: CLI override → current directory.
pub fn resolve_workspace(override_root: Option<PathBuf>) -> Result<WorkspaceContext> {
    let root = match override_root {
        Some(root) => root,
        None => env::current_dir().context("failed to obtain current directory")?,
    };
    Ok(WorkspaceContext::new(root))
}
