//! Library-level tests for the envelope codec, the catalog and normalization.

use std::sync::Arc;
use std::thread;

use cloud_resource_mux::apis::kubernetes::KubernetesDeployment;
use cloud_resource_mux::{
    extract_schema, find_similar_kinds, into_payload, normalize, snake_to_pascal, unwrap, wrap,
    Catalog, CodecError, Envelope, Kind, Metadata, NormalizeError, WrapOptions, MAX_SUGGESTIONS,
    SKIPPED_FIELDS,
};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Non-default data for every wired payload type.
fn sample_data(kind: &str) -> Value {
    match kind {
        "confluent_kafka" => json!({
            "cloud": "AWS",
            "region": "us-east-2",
            "availability": "multi_zone",
            "topics": [{ "name": "orders", "partitions": 6, "retention_ms": 604800000i64 }]
        }),
        "aws_eks_cluster" => json!({
            "subnet_ids": ["subnet-a", "subnet-b"],
            "cluster_role_arn": "arn:aws:iam::123456789012:role/eks",
            "version": "1.30",
            "enable_control_plane_logs": true
        }),
        "aws_rds_instance" => json!({
            "engine": "postgres",
            "engine_version": "16.3",
            "instance_class": "db.t4g.medium",
            "allocated_storage_gb": 50,
            "port": 5432,
            "parameters": { "max_connections": "200" }
        }),
        "aws_s3_bucket" => json!({
            "aws_region": "us-east-1",
            "versioning_enabled": true,
            "encryption_type": "sse_kms",
            "tags": { "team": "platform" },
            "lifecycle_rules": [{ "id": "expire-logs", "prefix": "logs/", "expiration_days": 30, "enabled": true }]
        }),
        "aws_vpc" => json!({
            "vpc_cidr": "10.0.0.0/16",
            "availability_zones": ["us-east-1a", "us-east-1b"],
            "subnets_per_availability_zone": 2,
            "is_nat_gateway_enabled": true
        }),
        "azure_aks_cluster" => json!({
            "region": "eastus",
            "network_plugin": "kubenet",
            "kubernetes_version": "1.29",
            "system_node_pool": { "vm_size": "Standard_D4s_v5", "min_count": 1, "max_count": 3 }
        }),
        "gcp_cloud_sql" => json!({
            "project_id": "acme-prod",
            "region": "us-central1",
            "database_engine": "postgresql",
            "tier": "db-custom-2-7680",
            "network": { "vpc_id": "default", "private_ip_enabled": true },
            "high_availability": { "enabled": true, "zone": "us-central1-b" },
            "database_flags": { "max_connections": "100" }
        }),
        "gcp_gke_cluster" => json!({
            "project_id": "acme-prod",
            "location": "us-central1",
            "release_channel": "regular",
            "node_pools": [{ "name": "general", "machine_type": "e2-standard-4", "min_node_count": 1, "max_node_count": 5 }]
        }),
        "kubernetes_deployment" => json!({
            "namespace": "web",
            "container": {
                "image": "nginx:latest",
                "ports": [{ "name": "http", "container_port": 8080, "service_port": 80, "network_protocol": "tcp", "is_ingress_port": true }],
                "resources": { "limits": { "cpu": "1", "memory": "1Gi" } },
                "variables": { "LOG_LEVEL": "info" }
            },
            "ingress": { "enabled": true, "hostname": "web.example.com" },
            "availability": {
                "min_replicas": 2,
                "horizontal_pod_autoscaling": { "is_enabled": true, "target_cpu_utilization_percent": 0.1 }
            }
        }),
        "kubernetes_postgres" => json!({
            "namespace": "db",
            "container": { "replicas": 1, "persistence_enabled": true, "disk_size": "10Gi" },
            "databases": [{ "name": "app", "owner_role": "app" }]
        }),
        "kubernetes_redis" => json!({
            "namespace": "cache",
            "container": { "replicas": 1, "disk_size": "1Gi" }
        }),
        "civo_kubernetes_cluster" => json!({
            "cluster_name": "staging",
            "region": "fra1",
            "highly_available": true,
            "default_node_pool": { "size": "g4s.kube.medium", "node_count": 3 }
        }),
        "digital_ocean_droplet" => json!({
            "droplet_name": "bastion",
            "region": "nyc3",
            "size": "s-1vcpu-1gb",
            "image": "ubuntu-24-04-x64",
            "ssh_key_ids": ["42"],
            "volume_size_gib": 20
        }),
        "cloudflare_dns_zone" => json!({
            "zone_name": "example.com",
            "account_id": "abc123",
            "plan": "pro",
            "records": [{ "name": "www", "record_type": "cname", "value": "example.com", "proxied": true, "ttl": 300 }]
        }),
        other => panic!("no sample data for {other}"),
    }
}

#[test]
fn every_registered_kind_round_trips() {
    let catalog = Catalog::new();
    let kinds = catalog.registered_kinds();
    assert_eq!(kinds.len(), 14);

    for kind in kinds {
        let data = sample_data(kind.name());
        let envelope = wrap(&catalog, kind, &data, None, &WrapOptions::default())
            .unwrap_or_else(|e| panic!("wrap {kind}: {e}"));
        assert_eq!(envelope.payload_kind(), kind);

        let payload = unwrap(&envelope).unwrap();
        assert_eq!(payload.variant_name(), kind.name());
        assert_eq!(payload.to_value().unwrap(), data, "round trip of {kind}");
    }
}

#[test]
fn envelope_survives_the_wire() {
    let catalog = Catalog::new();
    let kind = catalog.kind("aws_s3_bucket").unwrap();
    let data = sample_data("aws_s3_bucket");
    let envelope = wrap(
        &catalog,
        kind,
        &data,
        Some(Metadata::new("logs", "acme", "prod")),
        &WrapOptions::default(),
    )
    .unwrap();

    let wire = serde_json::to_string(&envelope).unwrap();
    let decoded = Envelope::from_value(serde_json::from_str(&wire).unwrap()).unwrap();
    assert_eq!(decoded, envelope);
    assert_eq!(unwrap(&decoded).unwrap().to_value().unwrap(), data);
}

#[test]
fn deployment_scenario() {
    let catalog = Catalog::new();

    let kind = normalize(&catalog, "Kubernetes Deployment").unwrap();
    assert_eq!(kind.name(), "kubernetes_deployment");

    let schema = extract_schema(&catalog, kind).unwrap();
    let container = schema.fields.iter().find(|f| f.name == "container").unwrap();
    let image = container
        .nested_fields
        .iter()
        .find(|f| f.name == "image")
        .unwrap();
    assert_eq!(image.field_type, "string");

    let data = json!({ "container": { "image": "nginx:latest" } });
    let envelope = wrap(&catalog, kind, &data, None, &WrapOptions::default()).unwrap();
    let deployment = KubernetesDeployment::try_from(into_payload(envelope).unwrap()).unwrap();
    assert_eq!(deployment.container.unwrap().image, "nginx:latest");
}

#[test]
fn unspecified_kind_is_rejected_everywhere() {
    let catalog = Catalog::new();

    assert!(normalize(&catalog, "unspecified").is_err());
    assert!(catalog.all_kinds().all(|k| !k.is_unspecified()));
    assert!(matches!(
        wrap(&catalog, Kind::UNSPECIFIED, &json!({}), None, &WrapOptions::default()),
        Err(CodecError::UnspecifiedKind)
    ));
    assert!(matches!(
        extract_schema(&catalog, Kind::UNSPECIFIED),
        Err(CodecError::UnspecifiedKind)
    ));
}

#[test]
fn every_registered_schema_is_complete() {
    let catalog = Catalog::new();
    for kind in catalog.registered_kinds() {
        let schema = extract_schema(&catalog, kind).unwrap();
        assert_eq!(schema.kind, kind.name());
        assert!(!schema.fields.is_empty(), "{kind} has no fields");

        let descriptor = catalog.resolve_variant(kind).unwrap().descriptor();
        let expected: Vec<&str> = descriptor
            .fields
            .iter()
            .map(|f| f.name)
            .filter(|name| !SKIPPED_FIELDS.contains(name))
            .collect();
        let actual: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(actual, expected, "top-level fields of {kind}");
    }
}

#[test]
fn unwired_kinds_fail_as_internal_errors() {
    let catalog = Catalog::new();
    let unwired: Vec<Kind> = catalog
        .all_kinds()
        .filter(|k| !catalog.is_registered(*k))
        .collect();
    assert!(!unwired.is_empty());

    for kind in unwired {
        let err = wrap(&catalog, kind, &json!({}), None, &WrapOptions::default()).unwrap_err();
        assert!(err.is_internal(), "{kind}: {err}");
    }
}

#[test]
fn shared_catalog_across_threads() {
    let catalog = Arc::new(Catalog::new());

    let handles: Vec<_> = catalog
        .registered_kinds()
        .into_iter()
        .map(|kind| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let spelling = snake_to_pascal(kind.name());
                let resolved = normalize(&catalog, &spelling).unwrap();
                let data = sample_data(resolved.name());
                let envelope =
                    wrap(&catalog, resolved, &data, None, &WrapOptions::default()).unwrap();
                unwrap(&envelope).unwrap().to_value().unwrap() == data
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn unknown_kind_error_lists_suggestions() {
    let catalog = Catalog::new();
    let err = normalize(&catalog, "postgres").unwrap_err();
    let NormalizeError::UnknownKind { input, suggestions } = &err else {
        panic!("expected UnknownKind");
    };
    assert_eq!(input, "postgres");
    assert!(suggestions.iter().any(|s| s.kind == "kubernetes_postgres"));
    assert!(err.to_string().starts_with("unknown cloud resource kind: postgres. Did you mean:"));
}

#[test]
fn bogus_kind_is_unknown_with_bounded_suggestions() {
    let catalog = Catalog::new();
    let err = normalize(&catalog, "totally_bogus_kind").unwrap_err();
    let NormalizeError::UnknownKind { input, suggestions } = err else {
        panic!("expected UnknownKind");
    };
    assert_eq!(input, "totally_bogus_kind");
    assert!(suggestions.len() <= MAX_SUGGESTIONS);
    assert!(suggestions.iter().all(|s| s.score > 0));
}

#[test]
fn popular_kinds_can_all_be_wrapped() {
    let catalog = Catalog::new();
    for kinds in catalog.popular_kinds_by_category().values() {
        for kind in kinds {
            let envelope = wrap(
                &catalog,
                *kind,
                &sample_data(kind.name()),
                None,
                &WrapOptions::default(),
            );
            assert!(envelope.is_ok(), "{kind} cannot be wrapped");
        }
    }
}

fn any_kind() -> impl Strategy<Value = Kind> {
    let kinds: Vec<Kind> = Catalog::new().all_kinds().collect();
    proptest::sample::select(kinds)
}

proptest! {
    #[test]
    fn every_spelling_normalizes(kind in any_kind()) {
        let catalog = Catalog::new();
        let name = kind.name();

        prop_assert_eq!(normalize(&catalog, name).unwrap(), kind);
        prop_assert_eq!(normalize(&catalog, &kind.pascal_name()).unwrap(), kind);
        prop_assert_eq!(normalize(&catalog, &name.replace('_', "-")).unwrap(), kind);
        prop_assert_eq!(normalize(&catalog, &name.replace('_', " ").to_uppercase()).unwrap(), kind);
        prop_assert_eq!(normalize(&catalog, &format!("  {name}  ")).unwrap(), kind);
    }

    #[test]
    fn suggestions_are_bounded_and_ranked(input in "[a-z_]{1,24}") {
        let catalog = Catalog::new();
        let suggestions = find_similar_kinds(&catalog, &input, MAX_SUGGESTIONS);

        prop_assert!(suggestions.len() <= MAX_SUGGESTIONS);
        prop_assert!(suggestions.iter().all(|s| s.score > 0));
        prop_assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(suggestions.iter().all(|s| catalog.kind(&s.kind).is_some()));
    }
}
