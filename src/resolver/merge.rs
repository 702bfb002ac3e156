//! User override merge and type defaulting.
use serde::Serialize;
use serde_json::{Map, Value};

use crate::resolver::template::{LaunchTemplate, CPPDBG_TYPE};

/// Fully-formed launch configuration handed to the launch sink.
///
/// A plain JSON object: user overrides may add fields outside the
/// template schema, so the record is not a closed struct.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LaunchRecord {
    fields: Map<String, Value>,
}

impl LaunchRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The `type` tag, when it is a string (overrides are free-form).
    pub fn backend_type(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// Apply user overrides on top of a base template.
///
/// Shallow last-write-wins merge: every override key replaces the
/// template field verbatim, keys outside the template schema included.
/// Afterwards an absent, null, or empty `type` is defaulted to `cppdbg`.
pub fn apply_overrides(template: LaunchTemplate, overrides: &Map<String, Value>) -> LaunchRecord {
    let mut fields = template.into_fields();
    for (key, value) in overrides {
        fields.insert(key.clone(), value.clone());
    }
    if needs_default_type(&fields) {
        fields.insert("type".to_string(), Value::String(CPPDBG_TYPE.to_string()));
    }
    LaunchRecord { fields }
}

fn needs_default_type(fields: &Map<String, Value>) -> bool {
    match fields.get("type") {
        None | Some(Value::Null) => true,
        Some(Value::String(tag)) => tag.is_empty(),
        Some(_) => false,
    }
}
