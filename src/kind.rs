//! Cloud resource kinds and their provider buckets.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::apis::kinds::KIND_TABLE;
use crate::normalize::{pascal_to_snake, snake_to_pascal};

/// One row of the generated kind table.
#[derive(Debug, PartialEq, Eq)]
pub struct KindDef {
    pub id: u32,
    pub name: &'static str,
}

/// A cloud resource kind: stable numeric id plus canonical snake_case name.
///
/// Kinds only come from the generated kind table, so every `Kind` value is a
/// known entry. Equality, ordering and hashing use the id.
#[derive(Clone, Copy)]
pub struct Kind(&'static KindDef);

impl Kind {
    /// The reserved zero kind. Never a valid target for wrapping or schema
    /// extraction.
    pub const UNSPECIFIED: Kind = Kind(&KindDef {
        id: 0,
        name: "unspecified",
    });

    /// Look up a kind by numeric id. Id 0 yields [`Kind::UNSPECIFIED`].
    pub fn from_id(id: u32) -> Option<Kind> {
        if id == 0 {
            return Some(Kind::UNSPECIFIED);
        }
        KIND_TABLE
            .binary_search_by(|def| def.id.cmp(&id))
            .ok()
            .map(|index| Kind(&KIND_TABLE[index]))
    }

    /// Look up a kind by its exact canonical snake_case name.
    pub fn from_canonical_name(name: &str) -> Option<Kind> {
        if name == Kind::UNSPECIFIED.name() {
            return Some(Kind::UNSPECIFIED);
        }
        KIND_TABLE.iter().find(|def| def.name == name).map(Kind)
    }

    /// Every kind in the generated table, in id order, without the
    /// unspecified sentinel.
    pub(crate) fn table() -> impl Iterator<Item = Kind> {
        KIND_TABLE.iter().map(Kind)
    }

    pub fn id(&self) -> u32 {
        self.0.id
    }

    /// Canonical snake_case name, e.g. `aws_rds_instance`.
    pub fn name(&self) -> &'static str {
        self.0.name
    }

    /// PascalCase enum-style spelling, e.g. `AwsRdsInstance`.
    pub fn pascal_name(&self) -> String {
        snake_to_pascal(self.0.name)
    }

    pub fn is_unspecified(&self) -> bool {
        self.0.id == 0
    }

    pub fn provider(&self) -> Provider {
        Provider::from_id(self.0.id)
    }
}

impl Default for Kind {
    fn default() -> Self {
        Kind::UNSPECIFIED
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl PartialOrd for Kind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.id.cmp(&other.0.id)
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind({}={})", self.0.name, self.0.id)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KindVisitor)
    }
}

struct KindVisitor;

impl<'de> Visitor<'de> for KindVisitor {
    type Value = Kind;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a cloud resource kind name or numeric id")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Kind, E> {
        Kind::from_canonical_name(value)
            .or_else(|| Kind::from_canonical_name(&pascal_to_snake(value)))
            .ok_or_else(|| E::custom(format!("unknown cloud resource kind {:?}", value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Kind, E> {
        u32::try_from(value)
            .ok()
            .and_then(Kind::from_id)
            .ok_or_else(|| E::custom(format!("unknown cloud resource kind id {}", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Kind, E> {
        u64::try_from(value)
            .map_err(|_| E::custom(format!("unknown cloud resource kind id {}", value)))
            .and_then(|id| self.visit_u64(id))
    }
}

/// Provider bucket a kind belongs to, derived from its numeric id.
///
/// The id ranges are a versioned contract: a new provider needs a new
/// declared range here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Test,
    Saas,
    Aws,
    Azure,
    Gcp,
    Kubernetes,
    Civo,
    DigitalOcean,
    Cloudflare,
    Unknown,
}

impl Provider {
    pub fn from_id(id: u32) -> Provider {
        match id {
            1..=49 => Provider::Test,
            50..=199 => Provider::Saas,
            200..=399 => Provider::Aws,
            400..=599 => Provider::Azure,
            600..=799 => Provider::Gcp,
            800..=999 => Provider::Kubernetes,
            1000..=1199 => Provider::Civo,
            1200..=1499 => Provider::DigitalOcean,
            1500..=1799 => Provider::Civo,
            1800..=2099 => Provider::Cloudflare,
            _ => Provider::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Test => "test",
            Provider::Saas => "saas",
            Provider::Aws => "aws",
            Provider::Azure => "azure",
            Provider::Gcp => "gcp",
            Provider::Kubernetes => "kubernetes",
            Provider::Civo => "civo",
            Provider::DigitalOcean => "digitalocean",
            Provider::Cloudflare => "cloudflare",
            Provider::Unknown => "unknown",
        }
    }

    /// Human-readable label used in kind listings.
    pub fn description(&self) -> &'static str {
        match self {
            Provider::Test => "Test/development resource",
            Provider::Saas => "SaaS platform resource",
            Provider::Aws => "Amazon Web Services resource",
            Provider::Azure => "Microsoft Azure resource",
            Provider::Gcp => "Google Cloud Platform resource",
            Provider::Kubernetes => "Kubernetes workload or operator",
            Provider::Civo => "Civo Cloud resource",
            Provider::DigitalOcean => "DigitalOcean resource",
            Provider::Cloudflare => "Cloudflare resource",
            Provider::Unknown => "Cloud resource",
        }
    }

    /// API version of the payloads published under this provider.
    pub fn api_version(&self) -> String {
        format!("{}.project-planton.org/v1", self.as_str())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
