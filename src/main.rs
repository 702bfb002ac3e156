//! Entry point for Kido Debug.
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use kido_debug::{
    cli::{
        execute_cli_command, CliCommand, ConfigSource, LaunchRequestArgs, ParsedCommand,
        ResolveProfile,
    },
    config::DebugSettings,
    host::{dispatch, JsonLineSink},
    resolver::{self, ResolveContext},
    telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

async fn bootstrap() -> Result<()> {
    telemetry::init_tracing()?;
    let args = LaunchRequestArgs::parse();

    match args.into_command()? {
        ParsedCommand::Resolve(profile) => run_resolve(profile).await,
        ParsedCommand::Cli(command) => handle_cli_command(command),
    }
}

async fn run_resolve(profile: ResolveProfile) -> Result<()> {
    let settings = match profile.config_source {
        ConfigSource::Default => DebugSettings::load_optional(&profile.config_path)?,
        ConfigSource::Cli | ConfigSource::Env => {
            DebugSettings::load_from_path(profile.config_path.clone())?
        }
    };

    let context = ResolveContext {
        platform: &profile.platform,
        extensions: &profile.extensions,
        settings: &settings,
    };
    let resolution = resolver::resolve(
        profile.target_name.as_deref(),
        profile.target_program.as_deref(),
        &context,
    );

    let mut sink = JsonLineSink::stdout();
    dispatch(&mut sink, &profile.workspace, resolution).await?;
    Ok(())
}

fn handle_cli_command(command: CliCommand) -> Result<()> {
    let message = execute_cli_command(command)?;
    println!("{message}");
    Ok(())
}
