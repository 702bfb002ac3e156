//! CLI argument definitions and `ResolveProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::{resolve_config_path, resolve_platform, resolve_workspace, ResolveProfile};
use crate::host::InstalledExtensions;

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Resolve(ResolveProfile),
    Cli(CliCommand),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the JSON Schema of the launch request sent to the host.
    Schema,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Kido Debug (launch configuration resolver)",
    long_about = None
)]
pub struct LaunchRequestArgs {
    /// Path to the target program to debug.
    #[arg(long)]
    pub program: Option<PathBuf>,
    /// Target name keying the argument table (defaults to the program file name).
    #[arg(long)]
    pub name: Option<String>,
    /// Path to config.toml (overrides KIDO_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Platform identifier reported by the host (defaults to this machine).
    #[arg(long)]
    pub platform: Option<String>,
    /// Debug extension id installed in the host editor (repeatable).
    #[arg(long = "extension")]
    pub extensions: Vec<String>,
    /// Workspace root handed to the host debugging service.
    #[arg(long)]
    pub workspace: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchRequestArgs {
    /// Build a `ResolveProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<ResolveProfile> {
        let (config_path, config_source) = resolve_config_path(self.config_override)?;
        let platform = resolve_platform(self.platform.as_deref());
        let workspace = resolve_workspace(self.workspace)?;
        let extensions = InstalledExtensions::new(self.extensions);

        Ok(ResolveProfile {
            target_name: self.name,
            target_program: self.program,
            config_path,
            config_source,
            platform,
            extensions,
            workspace,
        })
    }

    /// Parse CLI args into either resolve mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command {
            Some(command) => Ok(ParsedCommand::Cli(command)),
            None => Ok(ParsedCommand::Resolve(self.build()?)),
        }
    }
}
