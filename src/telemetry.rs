//! Telemetry initialization and launch dispatch span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a launch dispatch.
pub struct DispatchSpan {
    span: Span,
    started_at: Instant,
    request_id: Uuid,
}

impl DispatchSpan {
    /// Start a dispatch span.
    pub fn start(request_id: Uuid, backend_type: &str, display_name: &str) -> Self {
        let span = info_span!(
            target: "kido_debug::dispatch",
            "launch_dispatch",
            %request_id,
            backend_type,
            display_name
        );
        Self {
            span,
            started_at: Instant::now(),
            request_id,
        }
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "kido_debug::dispatch",
            request_id = %self.request_id,
            status = status,
            elapsed_ms = elapsed_ms,
            "Completed launch dispatch"
        );
    }
}
