//! Base launch configuration templates per backend and platform.
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::host::HostPlatform;
use crate::resolver::{backend::DebuggerBackend, identity::LaunchTarget};

/// Configuration type tag for the CodeLLDB backend.
pub const LLDB_TYPE: &str = "lldb";
/// Configuration type tag for CppTools on macOS and Linux.
pub const CPPDBG_TYPE: &str = "cppdbg";
/// Configuration type tag for CppTools on Windows.
pub const CPPVSDBG_TYPE: &str = "cppvsdbg";
/// Request kind; launch configurations never attach.
pub const LAUNCH_REQUEST: &str = "launch";

const MI_MODE_LLDB: &str = "lldb";
const MI_MODE_GDB: &str = "gdb";
const PRETTY_PRINTING_DESCRIPTION: &str = "Enable pretty-printing for gdb";
const PRETTY_PRINTING_COMMAND: &str = "-enable-pretty-printing";

/// Base launch configuration before user overrides are applied.
///
/// Field names follow the host editor's debug configuration schema, so
/// the serialized form is exactly what the launch sink expects.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct LaunchTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub backend_type: String,
    pub request: String,
    pub program: String,
    pub args: Vec<String>,
    #[serde(rename = "stopAtEntry")]
    pub stop_at_entry: bool,
    pub cwd: String,
    pub environment: Vec<Value>,
    #[serde(rename = "externalConsole")]
    pub external_console: bool,
    #[serde(rename = "MIMode", skip_serializing_if = "Option::is_none")]
    pub mi_mode: Option<String>,
    #[serde(rename = "miDebuggerPath", skip_serializing_if = "Option::is_none")]
    pub mi_debugger_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "ignoreFailures", skip_serializing_if = "Option::is_none")]
    pub ignore_failures: Option<bool>,
}

impl LaunchTemplate {
    /// Flatten into the wire field map the override merge operates on.
    ///
    /// Must stay in sync with the serde field names above; the template
    /// module tests assert the two encodings agree.
    pub fn into_fields(self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(self.name));
        fields.insert("type".to_string(), Value::String(self.backend_type));
        fields.insert("request".to_string(), Value::String(self.request));
        fields.insert("program".to_string(), Value::String(self.program));
        fields.insert(
            "args".to_string(),
            Value::Array(self.args.into_iter().map(Value::String).collect()),
        );
        fields.insert("stopAtEntry".to_string(), Value::Bool(self.stop_at_entry));
        fields.insert("cwd".to_string(), Value::String(self.cwd));
        fields.insert("environment".to_string(), Value::Array(self.environment));
        fields.insert(
            "externalConsole".to_string(),
            Value::Bool(self.external_console),
        );
        if let Some(mode) = self.mi_mode {
            fields.insert("MIMode".to_string(), Value::String(mode));
        }
        if let Some(path) = self.mi_debugger_path {
            fields.insert("miDebuggerPath".to_string(), Value::String(path));
        }
        if let Some(description) = self.description {
            fields.insert("description".to_string(), Value::String(description));
        }
        if let Some(text) = self.text {
            fields.insert("text".to_string(), Value::String(text));
        }
        if let Some(ignore) = self.ignore_failures {
            fields.insert("ignoreFailures".to_string(), Value::Bool(ignore));
        }
        fields
    }
}

/// Build the base template for a backend on a platform.
///
/// Returns `None` only for CppTools on an unrecognized platform; the
/// CodeLLDB template does not depend on the platform.
pub fn base_template(
    backend: DebuggerBackend,
    platform: &HostPlatform,
    target: &LaunchTarget,
    args: &[String],
) -> Option<LaunchTemplate> {
    match backend {
        DebuggerBackend::CodeLldb => Some(codelldb_template(target, args)),
        DebuggerBackend::CppTools => cpptools_template(platform, target, args),
    }
}

fn display_name(target: &LaunchTarget) -> String {
    format!("launch: {}", target.name)
}

fn codelldb_template(target: &LaunchTarget, args: &[String]) -> LaunchTemplate {
    LaunchTemplate {
        name: display_name(target),
        backend_type: LLDB_TYPE.to_string(),
        request: LAUNCH_REQUEST.to_string(),
        program: target.program_display(),
        args: args.to_vec(),
        stop_at_entry: true,
        cwd: target.working_directory(),
        environment: Vec::new(),
        external_console: false,
        mi_mode: None,
        mi_debugger_path: None,
        description: None,
        text: None,
        ignore_failures: None,
    }
}

fn cpptools_template(
    platform: &HostPlatform,
    target: &LaunchTarget,
    args: &[String],
) -> Option<LaunchTemplate> {
    let base = LaunchTemplate {
        name: display_name(target),
        backend_type: CPPDBG_TYPE.to_string(),
        request: LAUNCH_REQUEST.to_string(),
        program: target.program_display(),
        args: args.to_vec(),
        stop_at_entry: true,
        cwd: target.working_directory(),
        environment: Vec::new(),
        external_console: true,
        mi_mode: None,
        mi_debugger_path: Some(String::new()),
        description: None,
        text: None,
        ignore_failures: None,
    };

    match platform {
        HostPlatform::MacOs => Some(LaunchTemplate {
            mi_mode: Some(MI_MODE_LLDB.to_string()),
            ..base
        }),
        HostPlatform::Linux => Some(LaunchTemplate {
            mi_mode: Some(MI_MODE_GDB.to_string()),
            description: Some(PRETTY_PRINTING_DESCRIPTION.to_string()),
            text: Some(PRETTY_PRINTING_COMMAND.to_string()),
            ignore_failures: Some(true),
            ..base
        }),
        // The Windows debugger ignores per-target arguments.
        HostPlatform::Windows => Some(LaunchTemplate {
            backend_type: CPPVSDBG_TYPE.to_string(),
            args: Vec::new(),
            mi_mode: Some(MI_MODE_GDB.to_string()),
            description: Some(PRETTY_PRINTING_DESCRIPTION.to_string()),
            text: Some(PRETTY_PRINTING_COMMAND.to_string()),
            ignore_failures: Some(true),
            ..base
        }),
        HostPlatform::Other(_) => None,
    }
}
