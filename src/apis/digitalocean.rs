//! DigitalOcean payloads.

use serde::{Deserialize, Serialize};

use super::{is_default, API_VERSION_FIELD, KIND_FIELD};
use crate::descriptor::{FieldDescriptor, MessageDescriptor, Payload, ScalarType};
use crate::metadata::{Metadata, METADATA_DESCRIPTOR};

/// Single virtual machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalOceanDroplet {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub droplet_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub region: String,
    #[serde(skip_serializing_if = "is_default")]
    pub size: String,
    #[serde(skip_serializing_if = "is_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_default")]
    pub vpc_uuid: String,
    #[serde(skip_serializing_if = "is_default")]
    pub enable_ipv6: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub enable_backups: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub ssh_key_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub user_data: String,
    #[serde(skip_serializing_if = "is_default")]
    pub volume_size_gib: u32,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<DigitalOceanDropletStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalOceanDropletStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub droplet_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub ipv4_address: String,
    #[serde(skip_serializing_if = "is_default")]
    pub ipv6_address: String,
}

static DIGITAL_OCEAN_DROPLET_STATUS: MessageDescriptor = MessageDescriptor {
    name: "DigitalOceanDropletStatus",
    fields: &[
        FieldDescriptor::scalar("droplet_id", 1, ScalarType::Uint64),
        FieldDescriptor::scalar("ipv4_address", 2, ScalarType::String),
        FieldDescriptor::scalar("ipv6_address", 3, ScalarType::String),
    ],
};

static DIGITAL_OCEAN_DROPLET: MessageDescriptor = MessageDescriptor {
    name: "DigitalOceanDroplet",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("droplet_name", 4, ScalarType::String),
        FieldDescriptor::scalar("region", 5, ScalarType::String),
        FieldDescriptor::scalar("size", 6, ScalarType::String),
        FieldDescriptor::scalar("image", 7, ScalarType::String),
        FieldDescriptor::scalar("vpc_uuid", 8, ScalarType::String),
        FieldDescriptor::scalar("enable_ipv6", 9, ScalarType::Bool),
        FieldDescriptor::scalar("enable_backups", 10, ScalarType::Bool),
        FieldDescriptor::scalar("ssh_key_ids", 11, ScalarType::String).repeated(),
        FieldDescriptor::scalar("user_data", 12, ScalarType::String),
        FieldDescriptor::scalar("volume_size_gib", 13, ScalarType::Uint32),
        FieldDescriptor::message("status", 14, &DIGITAL_OCEAN_DROPLET_STATUS),
    ],
};

impl Payload for DigitalOceanDroplet {
    fn descriptor() -> &'static MessageDescriptor {
        &DIGITAL_OCEAN_DROPLET
    }
}
