//! Launch configuration resolver.
//!
//! Pure decision pipeline: (target identity, platform, installed
//! extensions, user settings) → one fully-formed launch configuration,
//! or a named no-op outcome. Every invocation is independent; the
//! resolver holds no state between calls.

use std::path::Path;

use tracing::debug;

use crate::config::DebugSettings;
use crate::host::{HostPlatform, InstalledExtensions};

pub mod backend;
pub mod identity;
pub mod merge;
pub mod targets;
pub mod template;

pub use backend::{select_backend, DebuggerBackend, CODELLDB_EXTENSION_ID, CODELLDB_SETTING};
pub use identity::LaunchTarget;
pub use merge::{apply_overrides, LaunchRecord};
pub use targets::ArgumentTable;
pub use template::{base_template, LaunchTemplate, CPPDBG_TYPE, CPPVSDBG_TYPE, LLDB_TYPE};

/// Read-only context a resolution runs against.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub platform: &'a HostPlatform,
    pub extensions: &'a InstalledExtensions,
    pub settings: &'a DebugSettings,
}

/// Outcome of a resolution.
///
/// The two non-`Ready` variants are deliberate no-ops, not errors: the
/// caller dispatches nothing and reports success.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Ready(LaunchRecord),
    MissingProgram,
    UnsupportedPlatform { platform: String },
}

/// Resolve a launch request into a configuration.
///
/// Steps, in order: abort without a program path, derive the target name,
/// look up per-target arguments, select the backend, build the base
/// template, apply user overrides.
pub fn resolve(
    target_name: Option<&str>,
    target_program: Option<&Path>,
    context: &ResolveContext<'_>,
) -> Resolution {
    let Some(target) = LaunchTarget::from_request(target_name, target_program) else {
        return Resolution::MissingProgram;
    };

    let args = context.settings.target_arguments.resolve(&target.name);
    let backend = select_backend(
        context.settings.config_type.as_deref(),
        context.platform,
        context.extensions,
    );
    debug!(
        target: "kido_debug::resolver",
        target_name = %target.name,
        backend = backend.as_str(),
        platform = %context.platform,
        args = args.len(),
        "Selected debugger backend"
    );

    let Some(template) = base_template(backend, context.platform, &target, args) else {
        return Resolution::UnsupportedPlatform {
            platform: context.platform.identifier().to_string(),
        };
    };

    Resolution::Ready(apply_overrides(template, &context.settings.overrides))
}
