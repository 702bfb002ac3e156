//! Host collaborator interfaces: platform query, extension presence, and
//! the launch sink.

pub mod extensions;
pub mod platform;
pub mod sink;

pub use extensions::InstalledExtensions;
pub use platform::HostPlatform;
pub use sink::{
    dispatch, DispatchOutcome, JsonLineSink, LaunchRequestEnvelope, WorkspaceContext,
    LAUNCH_REQUEST_KIND,
};
