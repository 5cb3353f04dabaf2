//! The cloud resource envelope and its codec.
//!
//! An [`Envelope`] carries one concrete payload inside a discriminated union
//! together with the [`Kind`] that selects it. [`wrap`] builds an envelope
//! from untyped data; [`unwrap`] hands back the typed payload after checking
//! that the kind and the populated variant agree.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::apis::CloudObjectVariant;
use crate::catalog::Catalog;
use crate::descriptor::{FieldDescriptor, FieldType, MapValue, MessageDescriptor};
use crate::error::{CodecError, Violation};
use crate::kind::Kind;
use crate::metadata::{cloud_object_kind, Metadata};
use crate::normalize::normalize;
use crate::types::{json_type_name, WrapOptions};
use crate::validator::validate_against_descriptor;

/// API version stamped on every envelope.
pub const ENVELOPE_API_VERSION: &str = "infra-hub.planton.ai/v1";

/// Resource kind stamped on every envelope.
pub const ENVELOPE_KIND: &str = "CloudResource";

/// Wire wrapper carrying exactly one concrete payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<EnvelopeSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeSpec {
    #[serde(default)]
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_object: Option<CloudObject>,
}

/// Union container. At most one payload is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<CloudObjectVariant>,
}

impl Envelope {
    /// Discriminant kind, or unspecified when the `spec` block is missing.
    pub fn payload_kind(&self) -> Kind {
        self.spec.as_ref().map(|spec| spec.kind).unwrap_or_default()
    }

    /// Decode an envelope from untyped data.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidSpecData` when the data does not have the
    /// envelope shape.
    pub fn from_value(value: Value) -> Result<Self, CodecError> {
        serde_json::from_value(value).map_err(|e| CodecError::InvalidSpecData {
            kind: ENVELOPE_KIND.to_string(),
            violations: vec![Violation {
                path: String::new(),
                message: e.to_string(),
            }],
        })
    }
}

/// Wrap untyped spec data into an envelope for `kind`.
///
/// In strict mode the data is first validated against the payload's JSON
/// Schema rendering, so unknown fields and type mismatches are reported
/// together with their paths. In both modes a `null` field counts as unset
/// and enum fields may be given by number.
///
/// # Errors
///
/// - `CodecError::UnspecifiedKind` for the zero kind.
/// - `CodecError::VariantNotFound` if no payload type is wired for `kind`.
/// - `CodecError::InvalidSpecData` if the data is not an object or does not
///   decode into the payload type.
pub fn wrap(
    catalog: &Catalog,
    kind: Kind,
    data: &Value,
    metadata: Option<Metadata>,
    options: &WrapOptions,
) -> Result<Envelope, CodecError> {
    let entry = catalog.resolve_variant(kind)?;

    if !data.is_object() {
        return Err(CodecError::InvalidSpecData {
            kind: kind.name().to_string(),
            violations: vec![Violation {
                path: String::new(),
                message: format!("spec data must be an object, got {}", json_type_name(data)),
            }],
        });
    }

    if options.strict {
        validate_against_descriptor(entry.descriptor(), data).map_err(|violations| {
            CodecError::InvalidSpecData {
                kind: kind.name().to_string(),
                violations,
            }
        })?;
    }

    let object = entry
        .decode(canonical_input(entry.descriptor(), data))
        .map_err(|e| CodecError::InvalidSpecData {
            kind: kind.name().to_string(),
            violations: vec![Violation {
                path: String::new(),
                message: format!("failed to decode into {}: {}", entry.descriptor().name, e),
            }],
        })?;

    debug!(kind = kind.name(), strict = options.strict, "wrapped cloud resource");

    Ok(Envelope {
        api_version: ENVELOPE_API_VERSION.to_string(),
        kind: ENVELOPE_KIND.to_string(),
        metadata,
        spec: Some(EnvelopeSpec {
            kind,
            cloud_object: Some(CloudObject {
                object: Some(object),
            }),
        }),
    })
}

// Decoder-ready copy of `data`: explicit nulls are dropped (field unset) and
// numeric enum values become their names. Members the descriptor does not
// know are passed through untouched.
fn canonical_input(descriptor: &MessageDescriptor, data: &Value) -> Value {
    let Value::Object(members) = data else {
        return data.clone();
    };

    let members = members
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| {
            let value = match descriptor.field(name) {
                Some(field) => canonical_field(field, value),
                None => value.clone(),
            };
            (name.clone(), value)
        })
        .collect();
    Value::Object(members)
}

fn canonical_field(field: &FieldDescriptor, value: &Value) -> Value {
    match (field.field_type, value) {
        (FieldType::Map { value: element, .. }, Value::Object(entries)) => Value::Object(
            entries
                .iter()
                .filter(|(_, entry)| !entry.is_null())
                .map(|(key, entry)| (key.clone(), canonical_element(element, entry)))
                .collect(),
        ),
        (field_type, Value::Array(items)) if field.is_repeated() => match field_type.element() {
            Some(element) => Value::Array(
                items
                    .iter()
                    .map(|item| canonical_element(element, item))
                    .collect(),
            ),
            None => value.clone(),
        },
        (field_type, _) if !field.is_repeated() => match field_type.element() {
            Some(element) => canonical_element(element, value),
            None => value.clone(),
        },
        _ => value.clone(),
    }
}

fn canonical_element(element: MapValue, value: &Value) -> Value {
    match element {
        MapValue::Enum(descriptor) => value
            .as_i64()
            .and_then(|number| descriptor.by_number(number))
            .map(|declared| Value::String(declared.name.to_string()))
            .unwrap_or_else(|| value.clone()),
        MapValue::Message(descriptor) => canonical_input(descriptor, value),
        MapValue::Scalar(_) => value.clone(),
    }
}

/// Wrap a self-describing cloud object: its `kind` header selects the
/// payload type and its `metadata` becomes the envelope metadata.
///
/// # Errors
///
/// Returns `CodecError::InvalidMetadata` for a missing or invalid kind header
/// or metadata block, `CodecError::UnknownKind` when the header does not
/// normalize, and any error [`wrap`] returns.
pub fn wrap_cloud_object(
    catalog: &Catalog,
    cloud_object: &Value,
    options: &WrapOptions,
) -> Result<Envelope, CodecError> {
    let kind = normalize(catalog, cloud_object_kind(cloud_object)?)?;
    let metadata = Metadata::from_cloud_object(cloud_object)?;
    debug!(kind = kind.name(), resource = %metadata.describe(), "wrapping cloud object");
    wrap(catalog, kind, cloud_object, Some(metadata), options)
}

/// Borrow the concrete payload carried by an envelope.
///
/// # Errors
///
/// - `CodecError::NilEnvelope` if the `spec` block or cloud object is absent.
/// - `CodecError::UnspecifiedKind` if the discriminant is the zero kind.
/// - `CodecError::EmptyVariant` if no payload is populated.
/// - `CodecError::KindMismatch` if the payload belongs to a different kind.
pub fn unwrap(envelope: &Envelope) -> Result<&CloudObjectVariant, CodecError> {
    let spec = envelope.spec.as_ref().ok_or(CodecError::NilEnvelope)?;
    if spec.kind.is_unspecified() {
        return Err(CodecError::UnspecifiedKind);
    }
    let cloud_object = spec.cloud_object.as_ref().ok_or(CodecError::NilEnvelope)?;
    let object = cloud_object.object.as_ref().ok_or(CodecError::EmptyVariant)?;

    if object.variant_name() != spec.kind.name() {
        return Err(CodecError::KindMismatch {
            expected: spec.kind.name().to_string(),
            actual: object.variant_name().to_string(),
        });
    }

    Ok(object)
}

/// Take the concrete payload out of an envelope, with the same checks as
/// [`unwrap`].
///
/// # Errors
///
/// Same as [`unwrap`].
pub fn into_payload(envelope: Envelope) -> Result<CloudObjectVariant, CodecError> {
    unwrap(&envelope)?;
    envelope
        .spec
        .and_then(|spec| spec.cloud_object)
        .and_then(|cloud_object| cloud_object.object)
        .ok_or(CodecError::EmptyVariant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::aws::AwsVpc;
    use crate::apis::kubernetes::{KubernetesDeployment, NetworkProtocol};
    use serde_json::json;

    fn kind(catalog: &Catalog, name: &str) -> Kind {
        catalog.kind(name).unwrap()
    }

    #[test]
    fn wrap_sets_headers_and_kind() {
        let catalog = Catalog::new();
        let vpc = kind(&catalog, "aws_vpc");
        let envelope = wrap(
            &catalog,
            vpc,
            &json!({ "vpc_cidr": "10.0.0.0/16" }),
            Some(Metadata::new("main", "acme", "prod")),
            &WrapOptions::default(),
        )
        .unwrap();

        assert_eq!(envelope.api_version, "infra-hub.planton.ai/v1");
        assert_eq!(envelope.kind, "CloudResource");
        assert_eq!(envelope.payload_kind(), vpc);
        assert_eq!(envelope.metadata.as_ref().unwrap().name, "main");
    }

    #[test]
    fn wrap_then_unwrap_round_trips() {
        let catalog = Catalog::new();
        let data = json!({
            "vpc_cidr": "10.0.0.0/16",
            "availability_zones": ["us-east-1a", "us-east-1b"],
            "is_nat_gateway_enabled": true
        });
        let envelope = wrap(
            &catalog,
            kind(&catalog, "aws_vpc"),
            &data,
            None,
            &WrapOptions::default(),
        )
        .unwrap();

        let payload = unwrap(&envelope).unwrap();
        assert_eq!(payload.to_value().unwrap(), data);

        let vpc = AwsVpc::try_from(payload.clone()).unwrap();
        assert_eq!(vpc.availability_zones.len(), 2);
    }

    #[test]
    fn wrap_rejects_unspecified_kind() {
        let catalog = Catalog::new();
        let err = wrap(
            &catalog,
            Kind::UNSPECIFIED,
            &json!({}),
            None,
            &WrapOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::UnspecifiedKind));
    }

    #[test]
    fn wrap_rejects_unwired_kind() {
        let catalog = Catalog::new();
        let err = wrap(
            &catalog,
            kind(&catalog, "aws_lambda"),
            &json!({}),
            None,
            &WrapOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::VariantNotFound { .. }));
    }

    #[test]
    fn wrap_rejects_non_object_data() {
        let catalog = Catalog::new();
        let err = wrap(
            &catalog,
            kind(&catalog, "aws_vpc"),
            &json!("10.0.0.0/16"),
            None,
            &WrapOptions::default(),
        )
        .unwrap_err();
        let CodecError::InvalidSpecData { violations, .. } = err else {
            panic!("expected InvalidSpecData");
        };
        assert_eq!(violations[0].message, "spec data must be an object, got string");
    }

    #[test]
    fn strict_wrap_reports_every_violation() {
        let catalog = Catalog::new();
        let err = wrap(
            &catalog,
            kind(&catalog, "kubernetes_deployment"),
            &json!({
                "namespace": 7,
                "container": { "image": "nginx", "replicas": 3 }
            }),
            None,
            &WrapOptions::default(),
        )
        .unwrap_err();

        let CodecError::InvalidSpecData { kind, violations } = err else {
            panic!("expected InvalidSpecData");
        };
        assert_eq!(kind, "kubernetes_deployment");
        assert_eq!(violations.len(), 2);
        let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
        assert!(paths.contains(&"/namespace"));
        assert!(paths.contains(&"/container"));
    }

    #[test]
    fn lenient_wrap_ignores_unknown_fields() {
        let catalog = Catalog::new();
        let envelope = wrap(
            &catalog,
            kind(&catalog, "kubernetes_deployment"),
            &json!({ "container": { "image": "nginx", "replicas": 3 } }),
            None,
            &WrapOptions::new().strict(false),
        )
        .unwrap();
        let payload = unwrap(&envelope).unwrap();
        assert_eq!(
            payload.to_value().unwrap(),
            json!({ "container": { "image": "nginx" } })
        );
    }

    #[test]
    fn lenient_wrap_still_rejects_type_mismatches() {
        let catalog = Catalog::new();
        let err = wrap(
            &catalog,
            kind(&catalog, "aws_vpc"),
            &json!({ "subnet_size": "large" }),
            None,
            &WrapOptions::new().strict(false),
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::InvalidSpecData { .. }));
        assert!(err.to_string().contains("failed to decode into AwsVpc"));
    }

    #[test]
    fn null_fields_are_unset_in_both_modes() {
        let catalog = Catalog::new();
        let data = json!({
            "namespace": null,
            "container": { "image": "nginx", "resources": null, "ports": null },
            "ingress": null
        });

        for options in [WrapOptions::new(), WrapOptions::new().strict(false)] {
            let envelope = wrap(
                &catalog,
                kind(&catalog, "kubernetes_deployment"),
                &data,
                None,
                &options,
            )
            .unwrap();
            assert_eq!(
                unwrap(&envelope).unwrap().to_value().unwrap(),
                json!({ "container": { "image": "nginx" } })
            );
        }
    }

    #[test]
    fn enum_numbers_decode_to_names() {
        let catalog = Catalog::new();
        let data = json!({
            "container": {
                "image": "nginx",
                "ports": [{ "name": "dns", "container_port": 53, "network_protocol": 2 }]
            }
        });

        for options in [WrapOptions::new(), WrapOptions::new().strict(false)] {
            let envelope = wrap(
                &catalog,
                kind(&catalog, "kubernetes_deployment"),
                &data,
                None,
                &options,
            )
            .unwrap();
            let deployment =
                KubernetesDeployment::try_from(into_payload(envelope).unwrap()).unwrap();
            assert_eq!(
                deployment.container.unwrap().ports[0].network_protocol,
                NetworkProtocol::Udp
            );
        }
    }

    #[test]
    fn undeclared_enum_number_is_rejected() {
        let catalog = Catalog::new();
        let err = wrap(
            &catalog,
            kind(&catalog, "aws_rds_instance"),
            &json!({ "engine": 42 }),
            None,
            &WrapOptions::new().strict(false),
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::InvalidSpecData { .. }));
    }

    #[test]
    fn unwrap_without_spec_is_nil() {
        let envelope = Envelope {
            api_version: ENVELOPE_API_VERSION.into(),
            kind: ENVELOPE_KIND.into(),
            metadata: None,
            spec: None,
        };
        assert!(matches!(unwrap(&envelope), Err(CodecError::NilEnvelope)));
        assert_eq!(envelope.payload_kind(), Kind::UNSPECIFIED);
    }

    #[test]
    fn unwrap_without_cloud_object_is_nil() {
        let catalog = Catalog::new();
        let envelope = Envelope {
            api_version: ENVELOPE_API_VERSION.into(),
            kind: ENVELOPE_KIND.into(),
            metadata: None,
            spec: Some(EnvelopeSpec {
                kind: kind(&catalog, "aws_vpc"),
                cloud_object: None,
            }),
        };
        assert!(matches!(unwrap(&envelope), Err(CodecError::NilEnvelope)));
    }

    #[test]
    fn unwrap_with_unspecified_kind() {
        let envelope = Envelope {
            api_version: ENVELOPE_API_VERSION.into(),
            kind: ENVELOPE_KIND.into(),
            metadata: None,
            spec: Some(EnvelopeSpec {
                kind: Kind::UNSPECIFIED,
                cloud_object: Some(CloudObject {
                    object: Some(AwsVpc::default().into()),
                }),
            }),
        };
        assert!(matches!(unwrap(&envelope), Err(CodecError::UnspecifiedKind)));
    }

    #[test]
    fn unwrap_with_empty_variant() {
        let catalog = Catalog::new();
        let envelope = Envelope {
            api_version: ENVELOPE_API_VERSION.into(),
            kind: ENVELOPE_KIND.into(),
            metadata: None,
            spec: Some(EnvelopeSpec {
                kind: kind(&catalog, "aws_vpc"),
                cloud_object: Some(CloudObject::default()),
            }),
        };
        assert!(matches!(unwrap(&envelope), Err(CodecError::EmptyVariant)));
    }

    #[test]
    fn unwrap_detects_kind_mismatch() {
        let catalog = Catalog::new();
        let envelope = Envelope {
            api_version: ENVELOPE_API_VERSION.into(),
            kind: ENVELOPE_KIND.into(),
            metadata: None,
            spec: Some(EnvelopeSpec {
                kind: kind(&catalog, "aws_s3_bucket"),
                cloud_object: Some(CloudObject {
                    object: Some(AwsVpc::default().into()),
                }),
            }),
        };
        let err = unwrap(&envelope).unwrap_err();
        assert_eq!(
            err.to_string(),
            "envelope kind aws_s3_bucket does not match payload kind aws_vpc"
        );
    }

    #[test]
    fn envelope_wire_format() {
        let catalog = Catalog::new();
        let envelope = wrap(
            &catalog,
            kind(&catalog, "kubernetes_deployment"),
            &json!({ "container": { "image": "nginx:latest" } }),
            None,
            &WrapOptions::default(),
        )
        .unwrap();

        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            wire,
            json!({
                "api_version": "infra-hub.planton.ai/v1",
                "kind": "CloudResource",
                "spec": {
                    "kind": "kubernetes_deployment",
                    "cloud_object": {
                        "object": {
                            "kubernetes_deployment": { "container": { "image": "nginx:latest" } }
                        }
                    }
                }
            })
        );

        let decoded = Envelope::from_value(wire).unwrap();
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn envelope_accepts_pascal_kind_on_the_wire() {
        let envelope = Envelope::from_value(json!({
            "spec": {
                "kind": "KubernetesDeployment",
                "cloud_object": { "object": { "kubernetes_deployment": {} } }
            }
        }))
        .unwrap();
        let payload = into_payload(envelope).unwrap();
        assert_eq!(
            KubernetesDeployment::try_from(payload).unwrap(),
            KubernetesDeployment::default()
        );
    }

    #[test]
    fn wrap_cloud_object_reads_headers() {
        let catalog = Catalog::new();
        let object = json!({
            "api_version": "aws.project-planton.org/v1",
            "kind": "AwsVpc",
            "metadata": { "name": "main", "org": "acme", "env": "prod" },
            "vpc_cidr": "10.0.0.0/16"
        });
        let envelope = wrap_cloud_object(&catalog, &object, &WrapOptions::default()).unwrap();
        assert_eq!(envelope.payload_kind().name(), "aws_vpc");
        assert_eq!(envelope.metadata.as_ref().unwrap().org, "acme");

        let vpc = AwsVpc::try_from(into_payload(envelope).unwrap()).unwrap();
        assert_eq!(vpc.kind, "AwsVpc");
        assert_eq!(vpc.metadata.unwrap().env, "prod");
    }

    #[test]
    fn wrap_cloud_object_requires_metadata() {
        let catalog = Catalog::new();
        let err = wrap_cloud_object(
            &catalog,
            &json!({ "kind": "AwsVpc", "vpc_cidr": "10.0.0.0/16" }),
            &WrapOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::InvalidMetadata(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn wrap_cloud_object_with_unknown_kind() {
        let catalog = Catalog::new();
        let err = wrap_cloud_object(
            &catalog,
            &json!({ "kind": "AwsTeleporter", "metadata": {} }),
            &WrapOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::UnknownKind(_)));
    }
}
