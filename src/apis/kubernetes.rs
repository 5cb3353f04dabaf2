//! Kubernetes workload and operator payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{is_default, serialize_f32, API_VERSION_FIELD, KIND_FIELD};
use crate::descriptor::{
    EnumDescriptor, EnumValueDescriptor, FieldDescriptor, MapValue, MessageDescriptor, Payload,
    ScalarType,
};
use crate::metadata::{Metadata, METADATA_DESCRIPTOR};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuMemory {
    #[serde(skip_serializing_if = "is_default")]
    pub cpu: String,
    #[serde(skip_serializing_if = "is_default")]
    pub memory: String,
}

static CPU_MEMORY: MessageDescriptor = MessageDescriptor {
    name: "CpuMemory",
    fields: &[
        FieldDescriptor::scalar("cpu", 1, ScalarType::String),
        FieldDescriptor::scalar("memory", 2, ScalarType::String),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerResources {
    #[serde(skip_serializing_if = "is_default")]
    pub limits: Option<CpuMemory>,
    #[serde(skip_serializing_if = "is_default")]
    pub requests: Option<CpuMemory>,
}

static CONTAINER_RESOURCES: MessageDescriptor = MessageDescriptor {
    name: "ContainerResources",
    fields: &[
        FieldDescriptor::message("limits", 1, &CPU_MEMORY),
        FieldDescriptor::message("requests", 2, &CPU_MEMORY),
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkProtocol {
    #[default]
    ProtocolUnspecified,
    Tcp,
    Udp,
    Sctp,
}

static NETWORK_PROTOCOL: EnumDescriptor = EnumDescriptor {
    name: "NetworkProtocol",
    values: &[
        EnumValueDescriptor {
            name: "protocol_unspecified",
            number: 0,
        },
        EnumValueDescriptor {
            name: "tcp",
            number: 1,
        },
        EnumValueDescriptor {
            name: "udp",
            number: 2,
        },
        EnumValueDescriptor {
            name: "sctp",
            number: 3,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerPort {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub container_port: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub service_port: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub network_protocol: NetworkProtocol,
    #[serde(skip_serializing_if = "is_default")]
    pub is_ingress_port: bool,
}

static CONTAINER_PORT: MessageDescriptor = MessageDescriptor {
    name: "ContainerPort",
    fields: &[
        FieldDescriptor::scalar("name", 1, ScalarType::String),
        FieldDescriptor::scalar("container_port", 2, ScalarType::Int32),
        FieldDescriptor::scalar("service_port", 3, ScalarType::Int32),
        FieldDescriptor::enumeration("network_protocol", 4, &NETWORK_PROTOCOL),
        FieldDescriptor::scalar("is_ingress_port", 5, ScalarType::Bool),
    ],
};

/// Main application container of a deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentContainer {
    #[serde(skip_serializing_if = "is_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_default")]
    pub ports: Vec<ContainerPort>,
    #[serde(skip_serializing_if = "is_default")]
    pub resources: Option<ContainerResources>,
    #[serde(skip_serializing_if = "is_default")]
    pub variables: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub secrets: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub command: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub args: Vec<String>,
}

static DEPLOYMENT_CONTAINER: MessageDescriptor = MessageDescriptor {
    name: "KubernetesDeploymentContainer",
    fields: &[
        FieldDescriptor::scalar("image", 1, ScalarType::String),
        FieldDescriptor::message("ports", 2, &CONTAINER_PORT).repeated(),
        FieldDescriptor::message("resources", 3, &CONTAINER_RESOURCES),
        FieldDescriptor::map(
            "variables",
            4,
            ScalarType::String,
            MapValue::Scalar(ScalarType::String),
        ),
        FieldDescriptor::map(
            "secrets",
            5,
            ScalarType::String,
            MapValue::Scalar(ScalarType::String),
        ),
        FieldDescriptor::scalar("command", 6, ScalarType::String).repeated(),
        FieldDescriptor::scalar("args", 7, ScalarType::String).repeated(),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressSpec {
    #[serde(skip_serializing_if = "is_default")]
    pub enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub hostname: String,
}

static INGRESS_SPEC: MessageDescriptor = MessageDescriptor {
    name: "IngressSpec",
    fields: &[
        FieldDescriptor::scalar("enabled", 1, ScalarType::Bool),
        FieldDescriptor::scalar("hostname", 2, ScalarType::String),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizontalPodAutoscaling {
    #[serde(skip_serializing_if = "is_default")]
    pub is_enabled: bool,
    #[serde(skip_serializing_if = "is_default", serialize_with = "serialize_f32")]
    pub target_cpu_utilization_percent: f32,
    #[serde(skip_serializing_if = "is_default")]
    pub target_memory_utilization: String,
}

static HORIZONTAL_POD_AUTOSCALING: MessageDescriptor = MessageDescriptor {
    name: "HorizontalPodAutoscaling",
    fields: &[
        FieldDescriptor::scalar("is_enabled", 1, ScalarType::Bool),
        FieldDescriptor::scalar("target_cpu_utilization_percent", 2, ScalarType::Float),
        FieldDescriptor::scalar("target_memory_utilization", 3, ScalarType::String),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentAvailability {
    #[serde(skip_serializing_if = "is_default")]
    pub min_replicas: Option<i32>,
    #[serde(skip_serializing_if = "is_default")]
    pub horizontal_pod_autoscaling: Option<HorizontalPodAutoscaling>,
}

static DEPLOYMENT_AVAILABILITY: MessageDescriptor = MessageDescriptor {
    name: "KubernetesDeploymentAvailability",
    fields: &[
        FieldDescriptor::scalar("min_replicas", 1, ScalarType::Int32).optional(),
        FieldDescriptor::message("horizontal_pod_autoscaling", 2, &HORIZONTAL_POD_AUTOSCALING),
    ],
};

/// Stateless application deployment with optional ingress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesDeployment {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub namespace: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_namespace: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub container: Option<DeploymentContainer>,
    #[serde(skip_serializing_if = "is_default")]
    pub ingress: Option<IngressSpec>,
    #[serde(skip_serializing_if = "is_default")]
    pub availability: Option<DeploymentAvailability>,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<KubernetesWorkloadStatus>,
}

/// Endpoints reported back for any in-cluster workload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesWorkloadStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub namespace: String,
    #[serde(skip_serializing_if = "is_default")]
    pub service: String,
    #[serde(skip_serializing_if = "is_default")]
    pub port_forward_command: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kube_endpoint: String,
    #[serde(skip_serializing_if = "is_default")]
    pub external_hostname: String,
}

static KUBERNETES_WORKLOAD_STATUS: MessageDescriptor = MessageDescriptor {
    name: "KubernetesWorkloadStatus",
    fields: &[
        FieldDescriptor::scalar("namespace", 1, ScalarType::String),
        FieldDescriptor::scalar("service", 2, ScalarType::String),
        FieldDescriptor::scalar("port_forward_command", 3, ScalarType::String),
        FieldDescriptor::scalar("kube_endpoint", 4, ScalarType::String),
        FieldDescriptor::scalar("external_hostname", 5, ScalarType::String),
    ],
};

static KUBERNETES_DEPLOYMENT: MessageDescriptor = MessageDescriptor {
    name: "KubernetesDeployment",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("namespace", 4, ScalarType::String),
        FieldDescriptor::scalar("create_namespace", 5, ScalarType::Bool),
        FieldDescriptor::scalar("version", 6, ScalarType::String),
        FieldDescriptor::message("container", 7, &DEPLOYMENT_CONTAINER),
        FieldDescriptor::message("ingress", 8, &INGRESS_SPEC),
        FieldDescriptor::message("availability", 9, &DEPLOYMENT_AVAILABILITY),
        FieldDescriptor::message("status", 10, &KUBERNETES_WORKLOAD_STATUS),
    ],
};

impl Payload for KubernetesDeployment {
    fn descriptor() -> &'static MessageDescriptor {
        &KUBERNETES_DEPLOYMENT
    }
}

/// Container settings shared by the database operators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseContainer {
    #[serde(skip_serializing_if = "is_default")]
    pub replicas: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub resources: Option<ContainerResources>,
    #[serde(skip_serializing_if = "is_default")]
    pub persistence_enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub disk_size: String,
}

static DATABASE_CONTAINER: MessageDescriptor = MessageDescriptor {
    name: "DatabaseContainer",
    fields: &[
        FieldDescriptor::scalar("replicas", 1, ScalarType::Int32),
        FieldDescriptor::message("resources", 2, &CONTAINER_RESOURCES),
        FieldDescriptor::scalar("persistence_enabled", 3, ScalarType::Bool),
        FieldDescriptor::scalar("disk_size", 4, ScalarType::String),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresDatabase {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub owner_role: String,
}

static POSTGRES_DATABASE: MessageDescriptor = MessageDescriptor {
    name: "KubernetesPostgresDatabase",
    fields: &[
        FieldDescriptor::scalar("name", 1, ScalarType::String),
        FieldDescriptor::scalar("owner_role", 2, ScalarType::String),
    ],
};

/// PostgreSQL cluster managed by an in-cluster operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesPostgres {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub namespace: String,
    #[serde(skip_serializing_if = "is_default")]
    pub container: Option<DatabaseContainer>,
    #[serde(skip_serializing_if = "is_default")]
    pub ingress: Option<IngressSpec>,
    #[serde(skip_serializing_if = "is_default")]
    pub databases: Vec<PostgresDatabase>,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<KubernetesWorkloadStatus>,
}

static KUBERNETES_POSTGRES: MessageDescriptor = MessageDescriptor {
    name: "KubernetesPostgres",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("namespace", 4, ScalarType::String),
        FieldDescriptor::message("container", 5, &DATABASE_CONTAINER),
        FieldDescriptor::message("ingress", 6, &INGRESS_SPEC),
        FieldDescriptor::message("databases", 7, &POSTGRES_DATABASE).repeated(),
        FieldDescriptor::message("status", 8, &KUBERNETES_WORKLOAD_STATUS),
    ],
};

impl Payload for KubernetesPostgres {
    fn descriptor() -> &'static MessageDescriptor {
        &KUBERNETES_POSTGRES
    }
}

/// Redis deployment managed by an in-cluster operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesRedis {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub namespace: String,
    #[serde(skip_serializing_if = "is_default")]
    pub container: Option<DatabaseContainer>,
    #[serde(skip_serializing_if = "is_default")]
    pub ingress: Option<IngressSpec>,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<KubernetesWorkloadStatus>,
}

static KUBERNETES_REDIS: MessageDescriptor = MessageDescriptor {
    name: "KubernetesRedis",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("namespace", 4, ScalarType::String),
        FieldDescriptor::message("container", 5, &DATABASE_CONTAINER),
        FieldDescriptor::message("ingress", 6, &INGRESS_SPEC),
        FieldDescriptor::message("status", 7, &KUBERNETES_WORKLOAD_STATUS),
    ],
};

impl Payload for KubernetesRedis {
    fn descriptor() -> &'static MessageDescriptor {
        &KUBERNETES_REDIS
    }
}
