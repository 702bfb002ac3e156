//! CLI entrypoint module structure.
use anyhow::Result;

use crate::host::LaunchRequestEnvelope;

pub mod args;
pub mod profile;

pub use args::{CliCommand, LaunchRequestArgs, ParsedCommand};
pub use profile::{
    resolve_config_path, resolve_platform, resolve_workspace, ConfigSource, ResolveProfile,
};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand) -> Result<String> {
    match command {
        CliCommand::Schema => {
            let schema = schemars::schema_for!(LaunchRequestEnvelope);
            Ok(serde_json::to_string_pretty(&schema)?)
        }
    }
}
