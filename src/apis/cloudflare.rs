//! Cloudflare payloads.

use serde::{Deserialize, Serialize};

use super::{is_default, API_VERSION_FIELD, KIND_FIELD};
use crate::descriptor::{
    EnumDescriptor, EnumValueDescriptor, FieldDescriptor, MessageDescriptor, Payload, ScalarType,
};
use crate::metadata::{Metadata, METADATA_DESCRIPTOR};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudflareZonePlan {
    #[default]
    Free,
    Pro,
    Business,
    Enterprise,
}

static CLOUDFLARE_ZONE_PLAN: EnumDescriptor = EnumDescriptor {
    name: "CloudflareZonePlan",
    values: &[
        EnumValueDescriptor {
            name: "free",
            number: 0,
        },
        EnumValueDescriptor {
            name: "pro",
            number: 1,
        },
        EnumValueDescriptor {
            name: "business",
            number: 2,
        },
        EnumValueDescriptor {
            name: "enterprise",
            number: 3,
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudflareDnsRecordType {
    #[default]
    RecordTypeUnspecified,
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
}

static CLOUDFLARE_DNS_RECORD_TYPE: EnumDescriptor = EnumDescriptor {
    name: "CloudflareDnsRecordType",
    values: &[
        EnumValueDescriptor {
            name: "record_type_unspecified",
            number: 0,
        },
        EnumValueDescriptor {
            name: "a",
            number: 1,
        },
        EnumValueDescriptor {
            name: "aaaa",
            number: 2,
        },
        EnumValueDescriptor {
            name: "cname",
            number: 3,
        },
        EnumValueDescriptor {
            name: "mx",
            number: 4,
        },
        EnumValueDescriptor {
            name: "txt",
            number: 5,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudflareDnsRecord {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub record_type: CloudflareDnsRecordType,
    #[serde(skip_serializing_if = "is_default")]
    pub value: String,
    #[serde(skip_serializing_if = "is_default")]
    pub proxied: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub ttl: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub priority: i32,
}

static CLOUDFLARE_DNS_RECORD: MessageDescriptor = MessageDescriptor {
    name: "CloudflareDnsRecord",
    fields: &[
        FieldDescriptor::scalar("name", 1, ScalarType::String),
        FieldDescriptor::enumeration("record_type", 2, &CLOUDFLARE_DNS_RECORD_TYPE),
        FieldDescriptor::scalar("value", 3, ScalarType::String),
        FieldDescriptor::scalar("proxied", 4, ScalarType::Bool),
        FieldDescriptor::scalar("ttl", 5, ScalarType::Int32),
        FieldDescriptor::scalar("priority", 6, ScalarType::Int32),
    ],
};

/// Authoritative DNS zone with its records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudflareDnsZone {
    #[serde(skip_serializing_if = "is_default")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "is_default")]
    pub zone_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub account_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub plan: CloudflareZonePlan,
    #[serde(skip_serializing_if = "is_default")]
    pub paused: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub default_proxied: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub records: Vec<CloudflareDnsRecord>,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<CloudflareDnsZoneStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudflareDnsZoneStatus {
    #[serde(skip_serializing_if = "is_default")]
    pub zone_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub nameservers: Vec<String>,
}

static CLOUDFLARE_DNS_ZONE_STATUS: MessageDescriptor = MessageDescriptor {
    name: "CloudflareDnsZoneStatus",
    fields: &[
        FieldDescriptor::scalar("zone_id", 1, ScalarType::String),
        FieldDescriptor::scalar("nameservers", 2, ScalarType::String).repeated(),
    ],
};

static CLOUDFLARE_DNS_ZONE: MessageDescriptor = MessageDescriptor {
    name: "CloudflareDnsZone",
    fields: &[
        API_VERSION_FIELD,
        KIND_FIELD,
        FieldDescriptor::message("metadata", 3, &METADATA_DESCRIPTOR),
        FieldDescriptor::scalar("zone_name", 4, ScalarType::String),
        FieldDescriptor::scalar("account_id", 5, ScalarType::String),
        FieldDescriptor::enumeration("plan", 6, &CLOUDFLARE_ZONE_PLAN),
        FieldDescriptor::scalar("paused", 7, ScalarType::Bool),
        FieldDescriptor::scalar("default_proxied", 8, ScalarType::Bool),
        FieldDescriptor::message("records", 9, &CLOUDFLARE_DNS_RECORD).repeated(),
        FieldDescriptor::message("status", 10, &CLOUDFLARE_DNS_ZONE_STATUS),
    ],
};

impl Payload for CloudflareDnsZone {
    fn descriptor() -> &'static MessageDescriptor {
        &CLOUDFLARE_DNS_ZONE
    }
}
