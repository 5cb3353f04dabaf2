//! Payload validation against descriptor-derived JSON Schemas.
//!
//! A payload descriptor renders to a JSON Schema document with one `$defs`
//! entry per message type, so nested and self-referencing messages resolve
//! through `$ref`. Every object is closed (`additionalProperties: false`),
//! every field accepts `null`, and enum fields accept their declared value
//! names or numbers, including the zero value.

use std::collections::BTreeSet;

use serde_json::{json, Map, Value};

use crate::descriptor::{
    EnumDescriptor, FieldDescriptor, FieldType, MapValue, MessageDescriptor, ScalarType,
};
use crate::error::Violation;

const JSON_SCHEMA_DRAFT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Render a payload descriptor as a standalone JSON Schema document.
pub fn payload_json_schema(descriptor: &'static MessageDescriptor) -> Value {
    let mut defs = Map::new();
    let mut seen = BTreeSet::new();
    collect_defs(descriptor, &mut defs, &mut seen);

    json!({
        "$schema": JSON_SCHEMA_DRAFT,
        "title": descriptor.name,
        "$ref": def_ref(descriptor),
        "$defs": defs,
    })
}

fn collect_defs(
    descriptor: &'static MessageDescriptor,
    defs: &mut Map<String, Value>,
    seen: &mut BTreeSet<&'static str>,
) {
    if !seen.insert(descriptor.name) {
        return;
    }

    let mut properties = Map::new();
    for field in descriptor.fields {
        properties.insert(field.name.to_string(), field_schema(field));
    }
    defs.insert(
        descriptor.name.to_string(),
        json!({
            "type": "object",
            "properties": properties,
            "additionalProperties": false,
        }),
    );

    for field in descriptor.fields {
        match field.field_type {
            FieldType::Message(nested) | FieldType::Map { value: MapValue::Message(nested), .. } => {
                collect_defs(nested, defs, seen)
            }
            _ => {}
        }
    }
}

fn def_ref(descriptor: &MessageDescriptor) -> String {
    format!("#/$defs/{}", descriptor.name)
}

// Every property also accepts `null`, which decodes as "field unset". List
// items and map values do not.
fn field_schema(field: &FieldDescriptor) -> Value {
    if let FieldType::Map { value, .. } = field.field_type {
        return json!({
            "type": ["object", "null"],
            "additionalProperties": element_schema(value),
        });
    }

    match (field.field_type, field.is_repeated()) {
        (FieldType::Scalar(scalar), false) => {
            let mut schema = scalar_schema(scalar);
            schema["type"] = json!([schema["type"].clone(), "null"]);
            schema
        }
        (FieldType::Enum(descriptor), false) => {
            let mut values = enum_values(descriptor);
            values.push(Value::Null);
            json!({ "enum": values })
        }
        (FieldType::Message(descriptor), false) => json!({
            "type": ["object", "null"],
            "if": { "type": "object" },
            "then": { "$ref": def_ref(descriptor) },
        }),
        (field_type, _) => {
            let items = field_type.element().map(element_schema).unwrap_or_default();
            json!({ "type": ["array", "null"], "items": items })
        }
    }
}

fn element_schema(element: MapValue) -> Value {
    match element {
        MapValue::Scalar(scalar) => scalar_schema(scalar),
        MapValue::Enum(descriptor) => json!({ "enum": enum_values(descriptor) }),
        MapValue::Message(descriptor) => json!({ "$ref": def_ref(descriptor) }),
    }
}

// Enum values are accepted by name or by declared number.
fn enum_values(descriptor: &EnumDescriptor) -> Vec<Value> {
    let names = descriptor.values.iter().map(|value| json!(value.name));
    let numbers = descriptor.values.iter().map(|value| json!(value.number));
    names.chain(numbers).collect()
}

fn scalar_schema(scalar: ScalarType) -> Value {
    match scalar {
        ScalarType::String | ScalarType::Bytes => json!({ "type": "string" }),
        ScalarType::Bool => json!({ "type": "boolean" }),
        ScalarType::Float | ScalarType::Double => json!({ "type": "number" }),
        ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => json!({
            "type": "integer",
            "minimum": i32::MIN,
            "maximum": i32::MAX,
        }),
        ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => {
            json!({ "type": "integer" })
        }
        ScalarType::Uint32 | ScalarType::Fixed32 => json!({
            "type": "integer",
            "minimum": 0,
            "maximum": u32::MAX,
        }),
        ScalarType::Uint64 | ScalarType::Fixed64 => json!({ "type": "integer", "minimum": 0 }),
    }
}

/// Validate untyped data against a payload descriptor.
///
/// Collects every violation rather than stopping at the first.
///
/// # Errors
///
/// Returns the full list of violations when the data does not match.
pub fn validate_against_descriptor(
    descriptor: &'static MessageDescriptor,
    data: &Value,
) -> Result<(), Vec<Violation>> {
    validate_against_schema(&payload_json_schema(descriptor), data)
}

/// Validate data against an already-rendered schema.
///
/// Use this when validating many documents against one payload type.
///
/// # Errors
///
/// Returns the full list of violations when the data does not match. A
/// schema that fails to compile is reported as a single root violation.
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<Violation>> {
    let validator = jsonschema::validator_for(schema).map_err(|e| {
        vec![Violation {
            path: String::new(),
            message: format!("invalid schema: {}", e),
        }]
    })?;

    let violations: Vec<Violation> = validator
        .iter_errors(data)
        .map(|e| Violation {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
