//! Civo Cloud payloads.

use serde::{Deserialize, Serialize};

use super::{is_default, API_VERSION_FIELD, KIND_FIELD};
use crate::descriptor::{
    EnumDescriptor, EnumValueDescriptor, FieldDescriptor, MessageDescriptor, Payload, ScalarType,
};
use crate::metadata::{Metadata, METADATA_DESCRIPTOR};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CivoRegion {
    #[default]
    CivoRegionUnspecified,
    Lon1,
    Nyc1,
    Fra1,
    Phx1,
}

static CIVO_REGION: EnumDescriptor = EnumDescriptor {
    name: "CivoRegion",
    values: &[
        EnumValueDescriptor {
            name: "civo_region_unspecified",
            number: 0,
        },
        EnumValueDescriptor {
            name: "lon1",
            number: 1,
        },
        EnumValueDescriptor {
            name: "nyc1",
            number: 2,
        },
        EnumValueDescriptor {
            name: "fra1",
            number: 3,
        },
        EnumValueDescriptor {
            name: "phx1",
            number: 4,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CivoNodePool {
    #[serde(skip_serializing_if = "is_default")]
    pub size: String,
    #[serde(skip_serializing_if = "is_default")]
    pub node_count: u32,
}

static CIVO_NODE_POOL: MessageDescriptor = MessageDescriptor {
    name: "CivoKubernetesClusterDefaultNodePool",
    fields: &[
        FieldDescriptor::scalar("size", 1, ScalarType::String),
        FieldDescriptor::scalar("node_count", 2, ScalarType::Uint32),
    ],
};

/// K3s cluster on Civo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CivoKubernetesCluster {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub region: CivoRegion,
    #[serde(skip_serializing_if = "is_default")]
    pub kubernetes_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub network_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub highly_available: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub auto_upgrade: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub default_node_pool: Option<CivoNodePool>,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<CivoKubernetesClusterStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CivoKubernetesClusterStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kubeconfig_b64: String,
    #[serde(skip_serializing_if = "is_default")]
    pub api_server_endpoint: String,
}

static CIVO_KUBERNETES_CLUSTER_STATUS: MessageDescriptor = MessageDescriptor {
    name: "CivoKubernetesClusterStatus",
    fields: &[
        FieldDescriptor::scalar("cluster_id", 1, ScalarType::String),
        FieldDescriptor::scalar("kubeconfig_b64", 2, ScalarType::String),
        FieldDescriptor::scalar("api_server_endpoint", 3, ScalarType::String),
    ],
};

static CIVO_KUBERNETES_CLUSTER: MessageDescriptor = MessageDescriptor {
    name: "CivoKubernetesCluster",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("cluster_name", 4, ScalarType::String),
        FieldDescriptor::enumeration("region", 5, &CIVO_REGION),
        FieldDescriptor::scalar("kubernetes_version", 6, ScalarType::String),
        FieldDescriptor::scalar("network_id", 7, ScalarType::String),
        FieldDescriptor::scalar("highly_available", 8, ScalarType::Bool),
        FieldDescriptor::scalar("auto_upgrade", 9, ScalarType::Bool),
        FieldDescriptor::scalar("tags", 10, ScalarType::String).repeated(),
        FieldDescriptor::message("default_node_pool", 11, &CIVO_NODE_POOL),
        FieldDescriptor::message("status", 12, &CIVO_KUBERNETES_CLUSTER_STATUS),
    ],
};

impl Payload for CivoKubernetesCluster {
    fn descriptor() -> &'static MessageDescriptor {
        &CIVO_KUBERNETES_CLUSTER
    }
}
