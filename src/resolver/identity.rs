//! Target identity normalization.
use std::path::{Path, PathBuf};

/// The program a launch request is about, keyed by a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    /// Identifier used to key the argument table.
    pub name: String,
    /// Path to the executable to debug.
    pub program: PathBuf,
}

impl LaunchTarget {
    /// Normalize a raw request into a target.
    ///
    /// Returns `None` when the program path is missing or empty; this is
    /// the only early-exit in the resolver. An empty name falls back to
    /// the program's base file name.
    pub fn from_request(name: Option<&str>, program: Option<&Path>) -> Option<Self> {
        let program = program.filter(|path| !path.as_os_str().is_empty())?;
        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => derive_name(program),
        };
        Some(Self {
            name,
            program: program.to_path_buf(),
        })
    }

    /// Program path as the host-facing string field.
    pub fn program_display(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Working directory for the launch: the parent directory of the
    /// program, or `.` when the path has no parent component.
    pub fn working_directory(&self) -> String {
        match self.program.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                parent.to_string_lossy().into_owned()
            }
            _ => ".".to_string(),
        }
    }
}

fn derive_name(program: &Path) -> String {
    program
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.to_string_lossy().into_owned())
}
