//! Host platform query.
use std::fmt;

/// Operating system reported by the host editor.
///
/// Unrecognized identifiers are kept as `Other` so the resolver can treat
/// them as a named case instead of a silent fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPlatform {
    MacOs,
    Linux,
    Windows,
    Other(String),
}

impl HostPlatform {
    /// Detect the platform this process is running on.
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Parse a platform identifier as reported by hosts (`darwin`/`win32`
    /// aliases included).
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "macos" | "darwin" => HostPlatform::MacOs,
            "linux" => HostPlatform::Linux,
            "windows" | "win32" => HostPlatform::Windows,
            other => HostPlatform::Other(other.to_string()),
        }
    }

    /// Canonical identifier for logs and error payloads.
    pub fn identifier(&self) -> &str {
        match self {
            HostPlatform::MacOs => "macos",
            HostPlatform::Linux => "linux",
            HostPlatform::Windows => "windows",
            HostPlatform::Other(identifier) => identifier,
        }
    }

    pub fn is_macos(&self) -> bool {
        matches!(self, HostPlatform::MacOs)
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
