//! Descriptor-driven schema extraction.
//!
//! [`extract_schema`] walks a payload descriptor and reports every field an
//! author may set: type tag, required flag, enum values, map key/value types
//! and nested fields. Bookkeeping fields are skipped at every level.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::descriptor::{FieldDescriptor, FieldType, MessageDescriptor};
use crate::error::CodecError;
use crate::kind::Kind;

/// Fields filled in by the platform rather than by the author.
pub const SKIPPED_FIELDS: &[&str] = &["api_version", "kind", "metadata", "status", "lifecycle", "audit"];

const SCHEMA_URI_SCHEME: &str = "cloud-resource-schema://";

/// Field-by-field description of one payload type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudResourceSchema {
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub fields: Vec<SchemaField>,
}

/// One field of a schema tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    /// Approximate: true for non-repeated, non-map fields without the
    /// `optional` keyword. The descriptors carry no real requiredness.
    pub required: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested_fields: Vec<SchemaField>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_repeated: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_map: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub map_key_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub map_value_type: String,
}

/// Value constraints for a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Validation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pattern: String,
}

/// Extract the schema tree of the payload type bound to `kind`.
///
/// # Errors
///
/// Returns `CodecError::UnspecifiedKind` for the zero kind and
/// `CodecError::VariantNotFound` if no payload type is wired for `kind`.
pub fn extract_schema(catalog: &Catalog, kind: Kind) -> Result<CloudResourceSchema, CodecError> {
    let entry = catalog.resolve_variant(kind)?;
    let mut path = Vec::new();

    Ok(CloudResourceSchema {
        kind: kind.name().to_string(),
        description: format!("Cloud resource of type {}", kind.name()),
        fields: extract_fields(entry.descriptor(), &mut path),
    })
}

// `path` holds the message types currently being expanded. A message already
// on it is reported without nested fields.
fn extract_fields(
    descriptor: &'static MessageDescriptor,
    path: &mut Vec<&'static str>,
) -> Vec<SchemaField> {
    path.push(descriptor.name);
    let fields = descriptor
        .fields
        .iter()
        .filter(|field| !SKIPPED_FIELDS.contains(&field.name))
        .map(|field| extract_field(field, path))
        .collect();
    path.pop();
    fields
}

fn extract_field(field: &FieldDescriptor, path: &mut Vec<&'static str>) -> SchemaField {
    let mut schema_field = SchemaField {
        name: field.name.to_string(),
        field_type: field.type_tag().to_string(),
        required: is_field_required(field),
        description: String::new(),
        validation: validation_rules(field),
        enum_values: Vec::new(),
        nested_fields: Vec::new(),
        is_repeated: field.is_repeated(),
        is_map: field.is_map(),
        map_key_type: String::new(),
        map_value_type: String::new(),
    };

    match field.field_type {
        FieldType::Enum(descriptor) => {
            schema_field.enum_values = descriptor.specified_values().map(String::from).collect();
        }
        FieldType::Message(descriptor) => {
            if !path.contains(&descriptor.name) {
                schema_field.nested_fields = extract_fields(descriptor, path);
            }
        }
        FieldType::Map { key, value } => {
            schema_field.map_key_type = key.type_tag().to_string();
            schema_field.map_value_type = value.type_tag().to_string();
        }
        FieldType::Scalar(_) => {}
    }

    schema_field
}

fn is_field_required(field: &FieldDescriptor) -> bool {
    !field.has_optional_keyword() && !field.is_repeated() && !field.is_map()
}

// Descriptors carry no constraint annotations yet.
fn validation_rules(_field: &FieldDescriptor) -> Option<Validation> {
    None
}

/// Parse a schema URI such as `cloud-resource-schema://AwsEksCluster` and
/// return the kind spelling it names.
///
/// Returns `None` for other schemes or an empty kind.
pub fn parse_schema_uri(uri: &str) -> Option<&str> {
    let kind = uri.strip_prefix(SCHEMA_URI_SCHEME)?.trim_end_matches('/');
    (!kind.is_empty()).then_some(kind)
}
