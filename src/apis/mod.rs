//! Generated cloud resource type catalog.
//!
//! The kind table and the concrete payload types the codec multiplexes.
//! Each provider module defines its payloads with serde derives and a static
//! [`MessageDescriptor`]; [`CloudObjectVariant`] is the union over all of
//! them, keyed by canonical kind name.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::descriptor::{FieldDescriptor, MessageDescriptor, Payload, ScalarType};

pub(crate) mod kinds;

pub mod aws;
pub mod azure;
pub mod civo;
pub mod cloudflare;
pub mod digitalocean;
pub mod gcp;
pub mod kubernetes;
pub mod saas;

/// Serde predicate: omit a field that holds its default value.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Serde serializer for `f32` fields: widen through the shortest decimal
/// form so `0.1` comes back as `0.1`, not `0.10000000149011612`.
pub(crate) fn serialize_f32<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    let widened = value
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(*value));
    serializer.serialize_f64(widened)
}

// Every top-level payload opens with these two fields, then `metadata` (3).
pub(crate) const API_VERSION_FIELD: FieldDescriptor =
    FieldDescriptor::scalar("api_version", 1, ScalarType::String);
pub(crate) const KIND_FIELD: FieldDescriptor = FieldDescriptor::scalar("kind", 2, ScalarType::String);

/// Decode entry for one variant of the union.
#[derive(Clone, Copy)]
pub(crate) struct VariantBinding {
    /// Canonical kind name the variant is keyed by.
    pub name: &'static str,
    pub decode: fn(Value) -> Result<CloudObjectVariant, serde_json::Error>,
    pub descriptor: fn() -> &'static MessageDescriptor,
}

macro_rules! cloud_object_variants {
    ($($variant:ident($ty:ty) => $name:literal,)+) => {
        /// Exactly one concrete payload, tagged by canonical kind name.
        ///
        /// Serializes as a single-key object: `{"aws_vpc": {...}}`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum CloudObjectVariant {
            $(
                #[serde(rename = $name)]
                $variant($ty),
            )+
        }

        impl CloudObjectVariant {
            /// Canonical kind name of the populated variant.
            pub fn variant_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $name,)+
                }
            }

            pub fn descriptor(&self) -> &'static MessageDescriptor {
                match self {
                    $(Self::$variant(_) => <$ty as Payload>::descriptor(),)+
                }
            }

            /// Re-encode the payload as untyped data. Only populated fields
            /// appear in the output.
            pub fn to_value(&self) -> Result<Value, serde_json::Error> {
                match self {
                    $(Self::$variant(payload) => serde_json::to_value(payload),)+
                }
            }
        }

        $(
            impl From<$ty> for CloudObjectVariant {
                fn from(payload: $ty) -> Self {
                    Self::$variant(payload)
                }
            }

            impl TryFrom<CloudObjectVariant> for $ty {
                type Error = CloudObjectVariant;

                fn try_from(variant: CloudObjectVariant) -> Result<Self, Self::Error> {
                    match variant {
                        CloudObjectVariant::$variant(payload) => Ok(payload),
                        other => Err(other),
                    }
                }
            }
        )+

        pub(crate) fn variant_bindings() -> Vec<VariantBinding> {
            vec![
                $(
                    VariantBinding {
                        name: $name,
                        decode: |value| {
                            serde_json::from_value::<$ty>(value).map(CloudObjectVariant::$variant)
                        },
                        descriptor: <$ty as Payload>::descriptor,
                    },
                )+
            ]
        }
    };
}

cloud_object_variants! {
    ConfluentKafka(saas::ConfluentKafka) => "confluent_kafka",
    AwsEksCluster(aws::AwsEksCluster) => "aws_eks_cluster",
    AwsRdsInstance(aws::AwsRdsInstance) => "aws_rds_instance",
    AwsS3Bucket(aws::AwsS3Bucket) => "aws_s3_bucket",
    AwsVpc(aws::AwsVpc) => "aws_vpc",
    AzureAksCluster(azure::AzureAksCluster) => "azure_aks_cluster",
    GcpCloudSql(gcp::GcpCloudSql) => "gcp_cloud_sql",
    GcpGkeCluster(gcp::GcpGkeCluster) => "gcp_gke_cluster",
    KubernetesDeployment(kubernetes::KubernetesDeployment) => "kubernetes_deployment",
    KubernetesPostgres(kubernetes::KubernetesPostgres) => "kubernetes_postgres",
    KubernetesRedis(kubernetes::KubernetesRedis) => "kubernetes_redis",
    CivoKubernetesCluster(civo::CivoKubernetesCluster) => "civo_kubernetes_cluster",
    DigitalOceanDroplet(digitalocean::DigitalOceanDroplet) => "digital_ocean_droplet",
    CloudflareDnsZone(cloudflare::CloudflareDnsZone) => "cloudflare_dns_zone",
}
