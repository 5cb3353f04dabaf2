//! Core types shared by the codec and the command line.

use serde_json::Value;

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Options for wrapping untyped data into an envelope.
#[derive(Debug, Clone)]
pub struct WrapOptions {
    /// When true, data is validated against the payload's JSON Schema
    /// rendering before decoding, so unknown fields and type mismatches are
    /// all reported with their paths. When false, unknown fields are ignored
    /// and only the first decode failure is reported.
    pub strict: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl WrapOptions {
    /// Create new wrap options with strict mode enabled.
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Set strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
