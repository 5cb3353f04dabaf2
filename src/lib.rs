//! Cloud Resource Multiplexer
//!
//! Encode and decode many distinct cloud resource payload types through one
//! wire envelope, keyed by a resource [`Kind`].
//!
//! The library resolves free-form kind spellings to catalog entries, wraps
//! untyped JSON into an [`Envelope`] carrying the matching concrete payload,
//! unwraps envelopes back into typed payloads, and derives a field-by-field
//! schema for any payload type from its structural descriptor.
//!
//! # Example
//!
//! ```
//! use cloud_resource_mux::{extract_schema, normalize, unwrap, wrap, Catalog, WrapOptions};
//! use serde_json::json;
//!
//! let catalog = Catalog::new();
//!
//! let kind = normalize(&catalog, "Kubernetes Deployment").unwrap();
//! assert_eq!(kind.name(), "kubernetes_deployment");
//!
//! // The schema describes the nested container image.
//! let schema = extract_schema(&catalog, kind).unwrap();
//! let container = schema.fields.iter().find(|f| f.name == "container").unwrap();
//! assert!(container.nested_fields.iter().any(|f| f.name == "image" && f.field_type == "string"));
//!
//! // Wrapping and unwrapping reproduces the populated fields.
//! let data = json!({ "container": { "image": "nginx:latest" } });
//! let envelope = wrap(&catalog, kind, &data, None, &WrapOptions::default()).unwrap();
//! let payload = unwrap(&envelope).unwrap();
//! assert_eq!(payload.to_value().unwrap(), data);
//! ```
//!
//! # Accepted kind spellings
//!
//! | Input | Resolves to |
//! |-------|-------------|
//! | `aws_rds_instance` | `aws_rds_instance` |
//! | `AwsRdsInstance` | `aws_rds_instance` |
//! | `AWS RDS Instance` | `aws_rds_instance` |
//! | `aws-rds-instance` | `aws_rds_instance` |
//!
//! Anything else fails with ranked "did you mean" suggestions.

pub mod apis;
mod catalog;
mod descriptor;
mod envelope;
mod error;
mod kind;
mod loader;
mod metadata;
mod normalize;
mod schema;
mod types;
mod validator;

pub use apis::CloudObjectVariant;
pub use catalog::{
    Catalog, GroupedCatalog, KindInfo, ProviderKinds, VariantEntry, SCHEMA_URI_TEMPLATE,
};
pub use descriptor::{
    Cardinality, EnumDescriptor, EnumValueDescriptor, FieldDescriptor, FieldType, MapValue,
    MessageDescriptor, Payload, ScalarType,
};
pub use envelope::{
    into_payload, unwrap, wrap, wrap_cloud_object, CloudObject, Envelope, EnvelopeSpec,
    ENVELOPE_API_VERSION, ENVELOPE_KIND,
};
pub use error::{CodecError, LoadError, MetadataError, NormalizeError, Violation};
pub use kind::{Kind, Provider};
pub use loader::{load_document, load_document_auto, load_document_str, STDIN_SOURCE};
pub use metadata::{cloud_object_kind, Metadata, MetadataVersion};
pub use normalize::{
    find_similar_kinds, normalize, pascal_to_snake, similarity, snake_to_pascal, Suggestion,
    MAX_SUGGESTIONS,
};
pub use schema::{
    extract_schema, parse_schema_uri, CloudResourceSchema, SchemaField, Validation, SKIPPED_FIELDS,
};
pub use types::{json_type_name, WrapOptions};
pub use validator::{payload_json_schema, validate_against_descriptor, validate_against_schema};
