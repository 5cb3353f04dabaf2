//! SaaS platform payloads.

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
pub enum ConfluentKafkaAvailability {
    #[default]
    AvailabilityUnspecified,
    SingleZone,
    MultiZone,
}

static CONFLUENT_KAFKA_AVAILABILITY: EnumDescriptor = EnumDescriptor {
    name: "ConfluentKafkaAvailability",
    values: &[
        EnumValueDescriptor {
            name: "availability_unspecified",
            number: 0,
        },
        EnumValueDescriptor {
            name: "single_zone",
            number: 1,
        },
        EnumValueDescriptor {
            name: "multi_zone",
            number: 2,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfluentKafkaTopic {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub partitions: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub retention_ms: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub config: BTreeMap<String, String>,
}

static CONFLUENT_KAFKA_TOPIC: MessageDescriptor = MessageDescriptor {
    name: "ConfluentKafkaTopic",
    fields: &[
        FieldDescriptor::scalar("name", 1, ScalarType::String),
        FieldDescriptor::scalar("partitions", 2, ScalarType::Int32),
        FieldDescriptor::scalar("retention_ms", 3, ScalarType::Int64),
        FieldDescriptor::map("config", 4, ScalarType::String, MapValue::Scalar(ScalarType::String)),
    ],
};

/// Managed Kafka cluster on Confluent Cloud.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfluentKafka {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub cloud: String,
    #[serde(skip_serializing_if = "is_default")]
    pub region: String,
    #[serde(skip_serializing_if = "is_default")]
    pub availability: ConfluentKafkaAvailability,
    #[serde(skip_serializing_if = "is_default")]
    pub environment_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub topics: Vec<ConfluentKafkaTopic>,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<ConfluentKafkaStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfluentKafkaStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub bootstrap_endpoint: String,
    #[serde(skip_serializing_if = "is_default")]
    pub rest_endpoint: String,
}

static CONFLUENT_KAFKA_STATUS: MessageDescriptor = MessageDescriptor {
    name: "ConfluentKafkaStatus",
    fields: &[
        FieldDescriptor::scalar("cluster_id", 1, ScalarType::String),
        FieldDescriptor::scalar("bootstrap_endpoint", 2, ScalarType::String),
        FieldDescriptor::scalar("rest_endpoint", 3, ScalarType::String),
    ],
};

static CONFLUENT_KAFKA: MessageDescriptor = MessageDescriptor {
    name: "ConfluentKafka",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("cloud", 4, ScalarType::String),
        FieldDescriptor::scalar("region", 5, ScalarType::String),
        FieldDescriptor::enumeration("availability", 6, &CONFLUENT_KAFKA_AVAILABILITY),
        FieldDescriptor::scalar("environment_id", 7, ScalarType::String),
        FieldDescriptor::message("topics", 8, &CONFLUENT_KAFKA_TOPIC).repeated(),
        FieldDescriptor::message("status", 9, &CONFLUENT_KAFKA_STATUS),
    ],
};

impl Payload for ConfluentKafka {
    fn descriptor() -> &'static MessageDescriptor {
        &CONFLUENT_KAFKA
    }
}
