use std::fs;

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::tempdir;

use crate::common::{fixture, run_binary};

fn stdout_json_line(output: &std::process::Output) -> Result<Value> {
    let stdout = String::from_utf8(output.stdout.clone()).context("stdout is not UTF-8")?;
    let line = stdout.lines().next().context("stdout has no request line")?;
    serde_json::from_str(line).context("stdout line is not JSON")
}

#[tokio::test]
async fn binary_emits_one_launch_request_line() -> Result<()> {
    let output = run_binary(&[
        "--program",
        "/bin/app",
        "--platform",
        "linux",
        "--config",
        &fixture("tests/fixtures/config_empty.toml"),
        "--workspace",
        "/work",
    ])
    .await?;

    assert!(output.status.success(), "binary should exit successfully");
    let envelope = stdout_json_line(&output)?;
    assert_eq!(envelope["request"], "startDebugging");
    assert_eq!(envelope["workspace"], "/work");
    assert_eq!(envelope["configuration"]["name"], "launch: app");
    assert_eq!(envelope["configuration"]["type"], "cppdbg");
    assert_eq!(envelope["configuration"]["MIMode"], "gdb");
    assert_eq!(envelope["configuration"]["cwd"], "/bin");
    Ok(())
}

#[tokio::test]
async fn generated_settings_drive_backend_and_overrides() -> Result<()> {
    let scratch = tempdir().context("failed to create scratch directory")?;
    let config_path = scratch.path().join("config.toml");
    let content = r#"
[debugger]
config_type = "codelldb"

[debugger.target_arguments]
app = ["--flag"]

[debugger.overrides]
cwd = "/custom"
"#;
    fs::write(&config_path, content).context("failed to write settings")?;

    let output = run_binary(&[
        "--program",
        "/bin/app",
        "--platform",
        "linux",
        "--config",
        &config_path.display().to_string(),
        "--workspace",
        "/work",
    ])
    .await?;

    assert!(output.status.success(), "binary should exit successfully");
    let envelope = stdout_json_line(&output)?;
    assert_eq!(envelope["configuration"]["type"], "lldb");
    assert_eq!(envelope["configuration"]["args"], Value::from(vec!["--flag"]));
    assert_eq!(envelope["configuration"]["cwd"], "/custom");
    Ok(())
}

#[tokio::test]
async fn codelldb_is_implied_on_macos_with_the_extension() -> Result<()> {
    let output = run_binary(&[
        "--program",
        "/bin/app",
        "--platform",
        "darwin",
        "--extension",
        "vadimcn.vscode-lldb",
        "--config",
        &fixture("tests/fixtures/config_empty.toml"),
        "--workspace",
        "/work",
    ])
    .await?;

    assert!(output.status.success(), "binary should exit successfully");
    let envelope = stdout_json_line(&output)?;
    assert_eq!(envelope["configuration"]["type"], "lldb");
    assert_eq!(envelope["configuration"]["externalConsole"], Value::from(false));
    Ok(())
}

#[tokio::test]
async fn missing_program_is_a_silent_noop() -> Result<()> {
    let output = run_binary(&[
        "--name",
        "app",
        "--platform",
        "linux",
        "--config",
        &fixture("tests/fixtures/config_empty.toml"),
    ])
    .await?;

    assert!(output.status.success(), "no-op should exit successfully");
    assert!(output.stdout.is_empty(), "no-op must not write to stdout");
    Ok(())
}

#[tokio::test]
async fn unrecognized_platform_is_a_silent_noop() -> Result<()> {
    let output = run_binary(&[
        "--program",
        "/bin/app",
        "--platform",
        "freebsd",
        "--config",
        &fixture("tests/fixtures/config_empty.toml"),
    ])
    .await?;

    assert!(output.status.success(), "no-op should exit successfully");
    assert!(output.stdout.is_empty(), "no-op must not write to stdout");
    Ok(())
}

#[tokio::test]
async fn invalid_settings_fail_the_request() -> Result<()> {
    let output = run_binary(&[
        "--program",
        "/bin/app",
        "--platform",
        "linux",
        "--config",
        &fixture("tests/fixtures/config_malformed.toml"),
    ])
    .await?;

    assert!(!output.status.success(), "malformed settings must fail");
    assert!(output.stdout.is_empty(), "no request may be dispatched");
    Ok(())
}

#[tokio::test]
async fn schema_command_prints_the_envelope_schema() -> Result<()> {
    let output = run_binary(&["schema"]).await?;

    assert!(output.status.success(), "schema command should succeed");
    let stdout = String::from_utf8(output.stdout).context("stdout is not UTF-8")?;
    let schema: Value = serde_json::from_str(&stdout).context("schema is not JSON")?;
    let properties = schema["properties"]
        .as_object()
        .context("schema has no properties")?;
    assert!(properties.contains_key("configuration"));
    Ok(())
}
