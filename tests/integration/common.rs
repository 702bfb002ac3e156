use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_kido-debug");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Run the binary with the given arguments and capture its output.
pub async fn run_binary(args: &[&str]) -> Result<std::process::Output> {
    let mut command = Command::new(BINARY_PATH);
    command
        .args(args)
        .env_remove("KIDO_CONFIG_PATH")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    command
        .output()
        .await
        .context("failed to run kido-debug binary")
}
