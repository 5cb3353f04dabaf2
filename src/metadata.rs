//! Resource metadata carried at the envelope level.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::descriptor::{FieldDescriptor, MapValue, MessageDescriptor, ScalarType};
use crate::error::MetadataError;
use crate::types::json_type_name;

/// Identity and labelling of a cloud resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slug: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub org: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub env: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<MetadataVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataVersion {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

pub static METADATA_VERSION_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    name: "ApiResourceMetadataVersion",
    fields: &[FieldDescriptor::scalar("message", 1, ScalarType::String)],
};

pub static METADATA_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    name: "ApiResourceMetadata",
    fields: &[
        FieldDescriptor::scalar("name", 1, ScalarType::String),
        FieldDescriptor::scalar("slug", 2, ScalarType::String),
        FieldDescriptor::scalar("id", 3, ScalarType::String),
        FieldDescriptor::scalar("org", 4, ScalarType::String),
        FieldDescriptor::scalar("env", 5, ScalarType::String),
        FieldDescriptor::map(
            "labels",
            6,
            ScalarType::String,
            MapValue::Scalar(ScalarType::String),
        ),
        FieldDescriptor::map(
            "annotations",
            7,
            ScalarType::String,
            MapValue::Scalar(ScalarType::String),
        ),
        FieldDescriptor::scalar("tags", 8, ScalarType::String).repeated(),
        FieldDescriptor::message("version", 9, &METADATA_VERSION_DESCRIPTOR),
    ],
};

impl Metadata {
    pub fn new(name: impl Into<String>, org: impl Into<String>, env: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org: org.into(),
            env: env.into(),
            ..Self::default()
        }
    }

    /// Read the `metadata` sub-object of an untyped cloud object.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError` if the key is missing, is not an object, or
    /// lacks one of the required `name`, `org`, `env` fields.
    pub fn from_cloud_object(cloud_object: &Value) -> Result<Self, MetadataError> {
        let raw = cloud_object
            .get("metadata")
            .ok_or(MetadataError::MissingMetadata)?;
        Self::from_value(raw)
    }

    /// Build metadata from an untyped map.
    ///
    /// `name`, `org` and `env` must be non-empty strings. Optional fields are
    /// taken when present with the right shape; label, annotation and tag
    /// entries that are not strings are dropped.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError` if `value` is not an object or a required
    /// field is missing.
    pub fn from_value(value: &Value) -> Result<Self, MetadataError> {
        let map = value.as_object().ok_or_else(|| MetadataError::NotAnObject {
            actual: json_type_name(value).to_string(),
        })?;

        let mut metadata = Metadata {
            name: required_string(map, "name")?,
            org: required_string(map, "org")?,
            env: required_string(map, "env")?,
            slug: optional_string(map, "slug"),
            id: optional_string(map, "id"),
            ..Metadata::default()
        };

        if let Some(Value::Object(labels)) = map.get("labels") {
            metadata.labels = string_map(labels);
        }
        if let Some(Value::Object(annotations)) = map.get("annotations") {
            metadata.annotations = string_map(annotations);
        }
        if let Some(Value::Array(tags)) = map.get("tags") {
            metadata.tags = tags
                .iter()
                .filter_map(|tag| tag.as_str().map(String::from))
                .collect();
        }
        if let Some(Value::Object(version)) = map.get("version") {
            metadata.version = Some(MetadataVersion {
                message: optional_string(version, "message"),
            });
        }

        Ok(metadata)
    }

    /// Short description for log lines and error messages.
    pub fn describe(&self) -> String {
        let name = if self.name.is_empty() {
            &self.slug
        } else {
            &self.name
        };
        format!(
            "cloud resource {:?} in org {:?} env {:?}",
            name, self.org, self.env
        )
    }
}

/// Read the `kind` header of an untyped cloud object.
///
/// # Errors
///
/// Returns `MetadataError::MissingKind` if absent and
/// `MetadataError::InvalidKind` if not a non-empty string.
pub fn cloud_object_kind(cloud_object: &Value) -> Result<&str, MetadataError> {
    let value = cloud_object.get("kind").ok_or(MetadataError::MissingKind)?;
    match value.as_str() {
        Some(kind) if !kind.is_empty() => Ok(kind),
        _ => Err(MetadataError::InvalidKind),
    }
}

fn required_string(map: &Map<String, Value>, field: &'static str) -> Result<String, MetadataError> {
    match map.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(MetadataError::MissingField { field }),
    }
}

fn optional_string(map: &Map<String, Value>, field: &str) -> String {
    map.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_map(map: &Map<String, Value>) -> BTreeMap<String, String> {
    map.iter()
        .filter_map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
        .collect()
}
