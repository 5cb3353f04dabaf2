//! Google Cloud Platform payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{is_default, API_VERSION_FIELD, KIND_FIELD};
use crate::descriptor::{
    EnumDescriptor, EnumValueDescriptor, FieldDescriptor, MapValue, MessageDescriptor, Payload,
    ScalarType,
};
use crate::metadata::{Metadata, METADATA_DESCRIPTOR};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GkeReleaseChannel {
    #[default]
    GkeReleaseChannelUnspecified,
    Rapid,
    Regular,
    Stable,
}

static GKE_RELEASE_CHANNEL: EnumDescriptor = EnumDescriptor {
    name: "GkeReleaseChannel",
    values: &[
        EnumValueDescriptor {
            name: "gke_release_channel_unspecified",
            number: 0,
        },
        EnumValueDescriptor {
            name: "rapid",
            number: 1,
        },
        EnumValueDescriptor {
            name: "regular",
            number: 2,
        },
        EnumValueDescriptor {
            name: "stable",
            number: 3,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpGkeNodePool {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub machine_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub min_node_count: u32,
    #[serde(skip_serializing_if = "is_default")]
    pub max_node_count: u32,
    #[serde(skip_serializing_if = "is_default")]
    pub spot: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub node_labels: BTreeMap<String, String>,
}

static GCP_GKE_NODE_POOL: MessageDescriptor = MessageDescriptor {
    name: "GcpGkeNodePool",
    fields: &[
        FieldDescriptor::scalar("name", 1, ScalarType::String),
        FieldDescriptor::scalar("machine_type", 2, ScalarType::String),
        FieldDescriptor::scalar("min_node_count", 3, ScalarType::Uint32),
        FieldDescriptor::scalar("max_node_count", 4, ScalarType::Uint32),
        FieldDescriptor::scalar("spot", 5, ScalarType::Bool),
        FieldDescriptor::map(
            "node_labels",
            6,
            ScalarType::String,
            MapValue::Scalar(ScalarType::String),
        ),
    ],
};

/// GKE cluster with its node pools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpGkeCluster {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub project_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub location: String,
    #[serde(skip_serializing_if = "is_default")]
    pub subnetwork_self_link: String,
    #[serde(skip_serializing_if = "is_default")]
    pub master_ipv4_cidr_block: String,
    #[serde(skip_serializing_if = "is_default")]
    pub enable_public_nodes: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub release_channel: GkeReleaseChannel,
    #[serde(skip_serializing_if = "is_default")]
    pub node_pools: Vec<GcpGkeNodePool>,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<GcpGkeClusterStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpGkeClusterStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub endpoint: String,
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_ca_certificate: String,
    #[serde(skip_serializing_if = "is_default")]
    pub workload_identity_pool: String,
}

static GCP_GKE_CLUSTER_STATUS: MessageDescriptor = MessageDescriptor {
    name: "GcpGkeClusterStatus",
    fields: &[
        FieldDescriptor::scalar("endpoint", 1, ScalarType::String),
        FieldDescriptor::scalar("cluster_ca_certificate", 2, ScalarType::String),
        FieldDescriptor::scalar("workload_identity_pool", 3, ScalarType::String),
    ],
};

static GCP_GKE_CLUSTER: MessageDescriptor = MessageDescriptor {
    name: "GcpGkeCluster",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("project_id", 4, ScalarType::String),
        FieldDescriptor::scalar("location", 5, ScalarType::String),
        FieldDescriptor::scalar("subnetwork_self_link", 6, ScalarType::String),
        FieldDescriptor::scalar("master_ipv4_cidr_block", 7, ScalarType::String),
        FieldDescriptor::scalar("enable_public_nodes", 8, ScalarType::Bool),
        FieldDescriptor::enumeration("release_channel", 9, &GKE_RELEASE_CHANNEL),
        FieldDescriptor::message("node_pools", 10, &GCP_GKE_NODE_POOL).repeated(),
        FieldDescriptor::message("status", 11, &GCP_GKE_CLUSTER_STATUS),
    ],
};

impl Payload for GcpGkeCluster {
    fn descriptor() -> &'static MessageDescriptor {
        &GCP_GKE_CLUSTER
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GcpCloudSqlDatabaseEngine {
    #[default]
    DatabaseEngineUnspecified,
    Mysql,
    Postgresql,
}

static GCP_CLOUD_SQL_DATABASE_ENGINE: EnumDescriptor = EnumDescriptor {
    name: "GcpCloudSqlDatabaseEngine",
    values: &[
        EnumValueDescriptor {
            name: "database_engine_unspecified",
            number: 0,
        },
        EnumValueDescriptor {
            name: "mysql",
            number: 1,
        },
        EnumValueDescriptor {
            name: "postgresql",
            number: 2,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpCloudSqlNetwork {
    #[serde(skip_serializing_if = "is_default")]
    pub vpc_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub private_ip_enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub authorized_networks: Vec<String>,
}

static GCP_CLOUD_SQL_NETWORK: MessageDescriptor = MessageDescriptor {
    name: "GcpCloudSqlNetwork",
    fields: &[
        FieldDescriptor::scalar("vpc_id", 1, ScalarType::String),
        FieldDescriptor::scalar("private_ip_enabled", 2, ScalarType::Bool),
        FieldDescriptor::scalar("authorized_networks", 3, ScalarType::String).repeated(),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpCloudSqlHighAvailability {
    #[serde(skip_serializing_if = "is_default")]
    pub enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub zone: String,
}

static GCP_CLOUD_SQL_HIGH_AVAILABILITY: MessageDescriptor = MessageDescriptor {
    name: "GcpCloudSqlHighAvailability",
    fields: &[
        FieldDescriptor::scalar("enabled", 1, ScalarType::Bool),
        FieldDescriptor::scalar("zone", 2, ScalarType::String),
    ],
};

/// Managed MySQL or PostgreSQL instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpCloudSql {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub project_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub region: String,
    #[serde(skip_serializing_if = "is_default")]
    pub database_engine: GcpCloudSqlDatabaseEngine,
    #[serde(skip_serializing_if = "is_default")]
    pub database_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub tier: String,
    #[serde(skip_serializing_if = "is_default")]
    pub storage_gb: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub network: Option<GcpCloudSqlNetwork>,
    #[serde(skip_serializing_if = "is_default")]
    pub high_availability: Option<GcpCloudSqlHighAvailability>,
    #[serde(skip_serializing_if = "is_default")]
    pub database_flags: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub root_password: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<GcpCloudSqlStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpCloudSqlStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub instance_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub connection_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub private_ip: String,
    #[serde(skip_serializing_if = "is_default")]
    pub public_ip: String,
}

static GCP_CLOUD_SQL_STATUS: MessageDescriptor = MessageDescriptor {
    name: "GcpCloudSqlStatus",
    fields: &[
        FieldDescriptor::scalar("instance_name", 1, ScalarType::String),
        FieldDescriptor::scalar("connection_name", 2, ScalarType::String),
        FieldDescriptor::scalar("private_ip", 3, ScalarType::String),
        FieldDescriptor::scalar("public_ip", 4, ScalarType::String),
    ],
};

static GCP_CLOUD_SQL: MessageDescriptor = MessageDescriptor {
    name: "GcpCloudSql",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("project_id", 4, ScalarType::String),
        FieldDescriptor::scalar("region", 5, ScalarType::String),
        FieldDescriptor::enumeration("database_engine", 6, &GCP_CLOUD_SQL_DATABASE_ENGINE),
        FieldDescriptor::scalar("database_version", 7, ScalarType::String),
        FieldDescriptor::scalar("tier", 8, ScalarType::String),
        FieldDescriptor::scalar("storage_gb", 9, ScalarType::Int32),
        FieldDescriptor::message("network", 10, &GCP_CLOUD_SQL_NETWORK),
        FieldDescriptor::message("high_availability", 11, &GCP_CLOUD_SQL_HIGH_AVAILABILITY),
        FieldDescriptor::map(
            "database_flags",
            12,
            ScalarType::String,
            MapValue::Scalar(ScalarType::String),
        ),
        FieldDescriptor::scalar("root_password", 13, ScalarType::String),
        FieldDescriptor::message("status", 14, &GCP_CLOUD_SQL_STATUS),
    ],
};

impl Payload for GcpCloudSql {
    fn descriptor() -> &'static MessageDescriptor {
        &GCP_CLOUD_SQL
    }
}
