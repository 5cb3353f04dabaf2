//! Microsoft Azure payloads.

use serde::{Deserialize, Serialize};

use super::{is_default, API_VERSION_FIELD, KIND_FIELD};
use crate::descriptor::{
    EnumDescriptor, EnumValueDescriptor, FieldDescriptor, MessageDescriptor, Payload, ScalarType,
};
use crate::metadata::{Metadata, METADATA_DESCRIPTOR};

/// Pod networking plugin. There is no unspecified value: the zero value
/// selects Azure CNI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AzureAksNetworkPlugin {
    #[default]
    AzureCni,
    Kubenet,
}

static AZURE_AKS_NETWORK_PLUGIN: EnumDescriptor = EnumDescriptor {
    name: "AzureAksNetworkPlugin",
    values: &[
        EnumValueDescriptor {
            name: "azure_cni",
            number: 0,
        },
        EnumValueDescriptor {
            name: "kubenet",
            number: 1,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureAksSystemNodePool {
    #[serde(skip_serializing_if = "is_default")]
    pub vm_size: String,
    #[serde(skip_serializing_if = "is_default")]
    pub min_count: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub max_count: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub availability_zones: Vec<String>,
}

static AZURE_AKS_SYSTEM_NODE_POOL: MessageDescriptor = MessageDescriptor {
    name: "AzureAksSystemNodePool",
    fields: &[
        FieldDescriptor::scalar("vm_size", 1, ScalarType::String),
        FieldDescriptor::scalar("min_count", 2, ScalarType::Int32),
        FieldDescriptor::scalar("max_count", 3, ScalarType::Int32),
        FieldDescriptor::scalar("availability_zones", 4, ScalarType::String).repeated(),
    ],
};

/// Managed Kubernetes cluster on AKS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureAksCluster {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub region: String,
    #[serde(skip_serializing_if = "is_default")]
    pub vnet_subnet_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub network_plugin: AzureAksNetworkPlugin,
    #[serde(skip_serializing_if = "is_default")]
    pub kubernetes_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub private_cluster_enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub authorized_ip_ranges: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub disable_azure_ad_rbac: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub system_node_pool: Option<AzureAksSystemNodePool>,
    #[serde(skip_serializing_if = "is_default")]
    pub log_analytics_workspace_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<AzureAksClusterStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureAksClusterStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub aks_cluster_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub api_server_endpoint: String,
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_kubeconfig: String,
}

static AZURE_AKS_CLUSTER_STATUS: MessageDescriptor = MessageDescriptor {
    name: "AzureAksClusterStatus",
    fields: &[
        FieldDescriptor::scalar("aks_cluster_id", 1, ScalarType::String),
        FieldDescriptor::scalar("api_server_endpoint", 2, ScalarType::String),
        FieldDescriptor::scalar("cluster_kubeconfig", 3, ScalarType::String),
    ],
};

static AZURE_AKS_CLUSTER: MessageDescriptor = MessageDescriptor {
    name: "AzureAksCluster",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("region", 4, ScalarType::String),
        FieldDescriptor::scalar("vnet_subnet_id", 5, ScalarType::String),
        FieldDescriptor::enumeration("network_plugin", 6, &AZURE_AKS_NETWORK_PLUGIN),
        FieldDescriptor::scalar("kubernetes_version", 7, ScalarType::String),
        FieldDescriptor::scalar("private_cluster_enabled", 8, ScalarType::Bool),
        FieldDescriptor::scalar("authorized_ip_ranges", 9, ScalarType::String).repeated(),
        FieldDescriptor::scalar("disable_azure_ad_rbac", 10, ScalarType::Bool),
        FieldDescriptor::message("system_node_pool", 11, &AZURE_AKS_SYSTEM_NODE_POOL),
        FieldDescriptor::scalar("log_analytics_workspace_id", 12, ScalarType::String),
        FieldDescriptor::message("status", 13, &AZURE_AKS_CLUSTER_STATUS),
    ],
};

impl Payload for AzureAksCluster {
    fn descriptor() -> &'static MessageDescriptor {
        &AZURE_AKS_CLUSTER
    }
}
