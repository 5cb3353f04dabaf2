//! Amazon Web Services payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{is_default, API_VERSION_FIELD, KIND_FIELD};
use crate::descriptor::{
    EnumDescriptor, EnumValueDescriptor, FieldDescriptor, MapValue, MessageDescriptor, Payload,
    ScalarType,
};
use crate::metadata::{Metadata, METADATA_DESCRIPTOR};

/// Virtual private cloud with public and private subnets per zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsVpc {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub vpc_cidr: String,
    #[serde(skip_serializing_if = "is_default")]
    pub availability_zones: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub subnets_per_availability_zone: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub subnet_size: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub is_nat_gateway_enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub is_dns_hostnames_enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub is_dns_support_enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<AwsVpcStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsVpcStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub vpc_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub private_subnet_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub public_subnet_ids: Vec<String>,
}

static AWS_VPC_STATUS: MessageDescriptor = MessageDescriptor {
    name: "AwsVpcStatus",
    fields: &[
        FieldDescriptor::scalar("vpc_id", 1, ScalarType::String),
        FieldDescriptor::scalar("private_subnet_ids", 2, ScalarType::String).repeated(),
        FieldDescriptor::scalar("public_subnet_ids", 3, ScalarType::String).repeated(),
    ],
};

static AWS_VPC: MessageDescriptor = MessageDescriptor {
    name: "AwsVpc",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("vpc_cidr", 4, ScalarType::String),
        FieldDescriptor::scalar("availability_zones", 5, ScalarType::String).repeated(),
        FieldDescriptor::scalar("subnets_per_availability_zone", 6, ScalarType::Int32),
        FieldDescriptor::scalar("subnet_size", 7, ScalarType::Int32),
        FieldDescriptor::scalar("is_nat_gateway_enabled", 8, ScalarType::Bool),
        FieldDescriptor::scalar("is_dns_hostnames_enabled", 9, ScalarType::Bool),
        FieldDescriptor::scalar("is_dns_support_enabled", 10, ScalarType::Bool),
        FieldDescriptor::message("status", 11, &AWS_VPC_STATUS),
    ],
};

impl Payload for AwsVpc {
    fn descriptor() -> &'static MessageDescriptor {
        &AWS_VPC
    }
}

/// Database engine of an RDS instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwsRdsEngine {
    #[default]
    EngineUnspecified,
    Postgres,
    Mysql,
    Mariadb,
}

static AWS_RDS_ENGINE: EnumDescriptor = EnumDescriptor {
    name: "AwsRdsEngine",
    values: &[
        EnumValueDescriptor {
            name: "engine_unspecified",
            number: 0,
        },
        EnumValueDescriptor {
            name: "postgres",
            number: 1,
        },
        EnumValueDescriptor {
            name: "mysql",
            number: 2,
        },
        EnumValueDescriptor {
            name: "mariadb",
            number: 3,
        },
    ],
};

/// Single-instance relational database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsRdsInstance {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub subnet_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub engine: AwsRdsEngine,
    #[serde(skip_serializing_if = "is_default")]
    pub engine_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub instance_class: String,
    #[serde(skip_serializing_if = "is_default")]
    pub allocated_storage_gb: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub storage_encrypted: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub multi_az: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "is_default")]
    pub username: String,
    #[serde(skip_serializing_if = "is_default")]
    pub password: String,
    #[serde(skip_serializing_if = "is_default")]
    pub parameters: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<AwsRdsInstanceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsRdsInstanceStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub rds_instance_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub rds_instance_arn: String,
    #[serde(skip_serializing_if = "is_default")]
    pub rds_instance_endpoint: String,
}

static AWS_RDS_INSTANCE_STATUS: MessageDescriptor = MessageDescriptor {
    name: "AwsRdsInstanceStatus",
    fields: &[
        FieldDescriptor::scalar("rds_instance_id", 1, ScalarType::String),
        FieldDescriptor::scalar("rds_instance_arn", 2, ScalarType::String),
        FieldDescriptor::scalar("rds_instance_endpoint", 3, ScalarType::String),
    ],
};

static AWS_RDS_INSTANCE: MessageDescriptor = MessageDescriptor {
    name: "AwsRdsInstance",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("subnet_ids", 4, ScalarType::String).repeated(),
        FieldDescriptor::scalar("security_group_ids", 5, ScalarType::String).repeated(),
        FieldDescriptor::enumeration("engine", 6, &AWS_RDS_ENGINE),
        FieldDescriptor::scalar("engine_version", 7, ScalarType::String),
        FieldDescriptor::scalar("instance_class", 8, ScalarType::String),
        FieldDescriptor::scalar("allocated_storage_gb", 9, ScalarType::Int32),
        FieldDescriptor::scalar("storage_encrypted", 10, ScalarType::Bool),
        FieldDescriptor::scalar("multi_az", 11, ScalarType::Bool),
        FieldDescriptor::scalar("port", 12, ScalarType::Int32).optional(),
        FieldDescriptor::scalar("username", 13, ScalarType::String),
        FieldDescriptor::scalar("password", 14, ScalarType::String),
        FieldDescriptor::map(
            "parameters",
            15,
            ScalarType::String,
            MapValue::Scalar(ScalarType::String),
        ),
        FieldDescriptor::message("status", 16, &AWS_RDS_INSTANCE_STATUS),
    ],
};

impl Payload for AwsRdsInstance {
    fn descriptor() -> &'static MessageDescriptor {
        &AWS_RDS_INSTANCE
    }
}

/// Server-side encryption applied to new objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwsS3EncryptionType {
    #[default]
    EncryptionTypeUnspecified,
    SseS3,
    SseKms,
}

static AWS_S3_ENCRYPTION_TYPE: EnumDescriptor = EnumDescriptor {
    name: "AwsS3EncryptionType",
    values: &[
        EnumValueDescriptor {
            name: "encryption_type_unspecified",
            number: 0,
        },
        EnumValueDescriptor {
            name: "sse_s3",
            number: 1,
        },
        EnumValueDescriptor {
            name: "sse_kms",
            number: 2,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsS3LifecycleRule {
    #[serde(skip_serializing_if = "is_default")]
    pub id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub prefix: String,
    #[serde(skip_serializing_if = "is_default")]
    pub expiration_days: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub enabled: bool,
}

static AWS_S3_LIFECYCLE_RULE: MessageDescriptor = MessageDescriptor {
    name: "AwsS3LifecycleRule",
    fields: &[
        FieldDescriptor::scalar("id", 1, ScalarType::String),
        FieldDescriptor::scalar("prefix", 2, ScalarType::String),
        FieldDescriptor::scalar("expiration_days", 3, ScalarType::Int32),
        FieldDescriptor::scalar("enabled", 4, ScalarType::Bool),
    ],
};

/// Object storage bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsS3Bucket {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub is_public: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub aws_region: String,
    #[serde(skip_serializing_if = "is_default")]
    pub versioning_enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub encryption_type: AwsS3EncryptionType,
    #[serde(skip_serializing_if = "is_default")]
    pub kms_key_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub tags: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub lifecycle_rules: Vec<AwsS3LifecycleRule>,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<AwsS3BucketStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsS3BucketStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub bucket_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub bucket_arn: String,
    #[serde(skip_serializing_if = "is_default")]
    pub region: String,
}

static AWS_S3_BUCKET_STATUS: MessageDescriptor = MessageDescriptor {
    name: "AwsS3BucketStatus",
    fields: &[
        FieldDescriptor::scalar("bucket_name", 1, ScalarType::String),
        FieldDescriptor::scalar("bucket_arn", 2, ScalarType::String),
        FieldDescriptor::scalar("region", 3, ScalarType::String),
    ],
};

static AWS_S3_BUCKET: MessageDescriptor = MessageDescriptor {
    name: "AwsS3Bucket",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("is_public", 4, ScalarType::Bool),
        FieldDescriptor::scalar("aws_region", 5, ScalarType::String),
        FieldDescriptor::scalar("versioning_enabled", 6, ScalarType::Bool),
        FieldDescriptor::enumeration("encryption_type", 7, &AWS_S3_ENCRYPTION_TYPE),
        FieldDescriptor::scalar("kms_key_id", 8, ScalarType::String),
        FieldDescriptor::map("tags", 9, ScalarType::String, MapValue::Scalar(ScalarType::String)),
        FieldDescriptor::message("lifecycle_rules", 10, &AWS_S3_LIFECYCLE_RULE).repeated(),
        FieldDescriptor::message("status", 11, &AWS_S3_BUCKET_STATUS),
    ],
};

impl Payload for AwsS3Bucket {
    fn descriptor() -> &'static MessageDescriptor {
        &AWS_S3_BUCKET
    }
}

/// Managed Kubernetes control plane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsEksCluster {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub subnet_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_role_arn: String,
    #[serde(skip_serializing_if = "is_default")]
    pub version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub disable_public_endpoint: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub public_access_cidrs: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub enable_control_plane_logs: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub kms_key_arn: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<AwsEksClusterStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsEksClusterStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub endpoint: String,
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_ca_certificate: String,
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_security_group_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub oidc_issuer_url: String,
}

static AWS_EKS_CLUSTER_STATUS: MessageDescriptor = MessageDescriptor {
    name: "AwsEksClusterStatus",
    fields: &[
        FieldDescriptor::scalar("endpoint", 1, ScalarType::String),
        FieldDescriptor::scalar("cluster_ca_certificate", 2, ScalarType::String),
        FieldDescriptor::scalar("cluster_security_group_id", 3, ScalarType::String),
        FieldDescriptor::scalar("oidc_issuer_url", 4, ScalarType::String),
    ],
};

static AWS_EKS_CLUSTER: MessageDescriptor = MessageDescriptor {
    name: "AwsEksCluster",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("subnet_ids", 4, ScalarType::String).repeated(),
        FieldDescriptor::scalar("cluster_role_arn", 5, ScalarType::String),
        FieldDescriptor::scalar("version", 6, ScalarType::String),
        FieldDescriptor::scalar("disable_public_endpoint", 7, ScalarType::Bool),
        FieldDescriptor::scalar("public_access_cidrs", 8, ScalarType::String).repeated(),
        FieldDescriptor::scalar("enable_control_plane_logs", 9, ScalarType::Bool),
        FieldDescriptor::scalar("kms_key_arn", 10, ScalarType::String),
        FieldDescriptor::message("status", 11, &AWS_EKS_CLUSTER_STATUS),
    ],
};

impl Payload for AwsEksCluster {
    fn descriptor() -> &'static MessageDescriptor {
        &AWS_EKS_CLUSTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_populated_fields_are_serialized() {
        let rds = AwsRdsInstance {
            engine: AwsRdsEngine::Postgres,
            instance_class: "db.t3.micro".into(),
            port: Some(0),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&rds).unwrap(),
            json!({ "engine": "postgres", "instance_class": "db.t3.micro", "port": 0 })
        );
    }

    #[test]
    fn enum_names_follow_descriptor() {
        for (value, name) in [
            (AwsS3EncryptionType::SseS3, "sse_s3"),
            (AwsS3EncryptionType::SseKms, "sse_kms"),
        ] {
            assert_eq!(serde_json::to_value(value).unwrap(), json!(name));
            assert!(AWS_S3_ENCRYPTION_TYPE.values.iter().any(|v| v.name == name));
        }
    }

    #[test]
    fn nested_repeated_messages_decode() {
        let bucket: AwsS3Bucket = serde_json::from_value(json!({
            "aws_region": "us-east-1",
            "lifecycle_rules": [{ "id": "expire-logs", "prefix": "logs/", "expiration_days": 30 }]
        }))
        .unwrap();
        assert_eq!(bucket.lifecycle_rules.len(), 1);
        assert_eq!(bucket.lifecycle_rules[0].expiration_days, 30);
        assert!(!bucket.lifecycle_rules[0].enabled);
    }
}
