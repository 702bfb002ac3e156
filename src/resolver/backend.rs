//! Debugger backend selection.
use crate::host::{HostPlatform, InstalledExtensions};

/// Settings value that explicitly selects the CodeLLDB backend.
pub const CODELLDB_SETTING: &str = "codelldb";
/// Extension id whose presence implies CodeLLDB on macOS.
pub const CODELLDB_EXTENSION_ID: &str = "vadimcn.vscode-lldb";

/// Native debugger engine the launch configuration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebuggerBackend {
    CodeLldb,
    CppTools,
}

impl DebuggerBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DebuggerBackend::CodeLldb => "codelldb",
            DebuggerBackend::CppTools => "cpptools",
        }
    }
}

/// Pick the backend for a launch request.
///
/// CodeLLDB when the user configured it explicitly, or implicitly on
/// macOS when the CodeLLDB extension is installed in the host. CppTools
/// otherwise.
pub fn select_backend(
    config_type: Option<&str>,
    platform: &HostPlatform,
    extensions: &InstalledExtensions,
) -> DebuggerBackend {
    if config_type == Some(CODELLDB_SETTING) {
        return DebuggerBackend::CodeLldb;
    }
    if platform.is_macos() && extensions.is_installed(CODELLDB_EXTENSION_ID) {
        return DebuggerBackend::CodeLldb;
    }
    DebuggerBackend::CppTools
}
