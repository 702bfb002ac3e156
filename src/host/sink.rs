//! Launch sink: the handoff to the host debugging service.
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::DispatchError;
use crate::resolver::{LaunchRecord, Resolution};
use crate::telemetry::DispatchSpan;

/// Request kind tag on every launch envelope.
pub const LAUNCH_REQUEST_KIND: &str = "startDebugging";

/// The caller's primary workspace, passed through to the host untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceContext {
    pub root: PathBuf,
}

impl WorkspaceContext {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

/// One launch request line as the host debugging service receives it.
#[derive(Debug, Serialize, JsonSchema)]
pub struct LaunchRequestEnvelope {
    pub request: String,
    pub workspace: String,
    pub configuration: Value,
}

impl LaunchRequestEnvelope {
    fn new(workspace: &WorkspaceContext, record: &LaunchRecord) -> Self {
        Self {
            request: LAUNCH_REQUEST_KIND.to_string(),
            workspace: workspace.root.to_string_lossy().into_owned(),
            configuration: record.to_value(),
        }
    }
}

/// Writes launch requests as single JSON lines to the host channel.
pub struct JsonLineSink<W> {
    writer: W,
}

impl JsonLineSink<Stdout> {
    /// Sink over this process's stdout, the default host channel.
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Hand one configuration to the host debugging service.
    ///
    /// Host-side failures surface as `DispatchError` and propagate to the
    /// caller unchanged.
    pub async fn start_debugging(
        &mut self,
        workspace: &WorkspaceContext,
        record: &LaunchRecord,
    ) -> Result<(), DispatchError> {
        let envelope = LaunchRequestEnvelope::new(workspace, record);
        let mut line = serde_json::to_vec(&envelope)
            .map_err(|source| DispatchError::Encode { source })?;
        line.push(b'\n');
        self.writer
            .write_all(&line)
            .await
            .map_err(|source| DispatchError::Write { source })?;
        self.writer
            .flush()
            .await
            .map_err(|source| DispatchError::Write { source })?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// What a dispatch call did with a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Dispatched,
    SkippedMissingProgram,
    SkippedUnsupportedPlatform,
}

/// Dispatch a resolution: exactly one sink call for a ready
/// configuration, a logged no-op otherwise.
pub async fn dispatch<W: AsyncWrite + Unpin>(
    sink: &mut JsonLineSink<W>,
    workspace: &WorkspaceContext,
    resolution: Resolution,
) -> Result<DispatchOutcome, DispatchError> {
    match resolution {
        Resolution::Ready(record) => {
            let span = DispatchSpan::start(
                Uuid::new_v4(),
                record.backend_type().unwrap_or(""),
                record.display_name().unwrap_or(""),
            );
            match sink.start_debugging(workspace, &record).await {
                Ok(()) => {
                    span.finish("dispatched");
                    Ok(DispatchOutcome::Dispatched)
                }
                Err(err) => {
                    span.finish("failed");
                    Err(err)
                }
            }
        }
        Resolution::MissingProgram => {
            debug!(
                target: "kido_debug::dispatch",
                "No target program supplied; skipping launch"
            );
            Ok(DispatchOutcome::SkippedMissingProgram)
        }
        Resolution::UnsupportedPlatform { platform } => {
            warn!(
                target: "kido_debug::dispatch",
                platform = %platform,
                "No launch template for this platform; skipping launch"
            );
            Ok(DispatchOutcome::SkippedUnsupportedPlatform)
        }
    }
}
