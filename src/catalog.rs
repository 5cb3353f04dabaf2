//! The kind catalog and the payload variant registry.
//!
//! [`Catalog::new`] builds one immutable value holding every name index and
//! every kind-to-payload binding. Build it once at startup and share it by
//! reference (or `Arc`) across threads; nothing in it is mutated afterwards.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::apis::{variant_bindings, CloudObjectVariant, VariantBinding};
use crate::descriptor::MessageDescriptor;
use crate::error::CodecError;
use crate::kind::{Kind, Provider};
use crate::normalize::snake_to_pascal;

/// URI template under which per-kind schemas are published.
pub const SCHEMA_URI_TEMPLATE: &str = "cloud-resource-schema://{kind}";

/// Kinds most agents ask for, per provider. Used for guidance in error
/// messages and listings.
const POPULAR_KINDS: &[(&str, &[&str])] = &[
    (
        "kubernetes",
        &[
            "kubernetes_deployment",
            "kubernetes_postgres",
            "kubernetes_redis",
            "kubernetes_mongodb",
            "kubernetes_kafka",
        ],
    ),
    (
        "aws",
        &[
            "aws_eks_cluster",
            "aws_rds_instance",
            "aws_rds_cluster",
            "aws_lambda",
            "aws_s3_bucket",
            "aws_vpc",
        ],
    ),
    (
        "gcp",
        &["gcp_gke_cluster", "gcp_cloud_sql", "gcp_cloud_function", "gcp_vpc"],
    ),
    (
        "azure",
        &["azure_aks_cluster", "azure_postgres", "azure_storage_account"],
    ),
];

/// A kind bound to its concrete payload type.
#[derive(Clone, Copy)]
pub struct VariantEntry {
    kind: Kind,
    binding: VariantBinding,
}

impl VariantEntry {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn descriptor(&self) -> &'static MessageDescriptor {
        (self.binding.descriptor)()
    }

    /// Decode untyped data into this entry's payload type.
    pub fn decode(&self, data: Value) -> Result<CloudObjectVariant, serde_json::Error> {
        (self.binding.decode)(data)
    }
}

impl std::fmt::Debug for VariantEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantEntry")
            .field("kind", &self.kind)
            .field("descriptor", &self.descriptor().name)
            .finish()
    }
}

/// Listing entry for one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindInfo {
    pub kind: String,
    pub provider: Provider,
    pub description: String,
}

/// Kinds of one provider in the grouped catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderKinds {
    pub api_version: String,
    /// PascalCase kind names, sorted.
    pub kinds: Vec<String>,
}

/// All kinds grouped by provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedCatalog {
    pub schema_uri_template: String,
    pub total_kinds: usize,
    pub providers: BTreeMap<String, ProviderKinds>,
}

/// Immutable set of kinds and their payload bindings.
#[derive(Debug)]
pub struct Catalog {
    by_name: HashMap<&'static str, Kind>,
    by_pascal: HashMap<String, Kind>,
    variants: HashMap<Kind, VariantEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Build the catalog from the generated kind table and payload types.
    ///
    /// Payload bindings whose name is not in the kind table are dropped with
    /// a warning.
    pub fn new() -> Self {
        let mut by_name = HashMap::new();
        let mut by_pascal = HashMap::new();
        for kind in Kind::table() {
            by_name.insert(kind.name(), kind);
            by_pascal.insert(kind.pascal_name(), kind);
        }

        let mut variants = HashMap::new();
        for binding in variant_bindings() {
            match by_name.get(binding.name) {
                Some(&kind) => {
                    variants.insert(kind, VariantEntry { kind, binding });
                }
                None => warn!(
                    variant = binding.name,
                    "payload type has no entry in the kind table"
                ),
            }
        }

        info!(
            kinds = by_name.len(),
            variants = variants.len(),
            "built cloud resource catalog"
        );

        Self {
            by_name,
            by_pascal,
            variants,
        }
    }

    /// Every valid kind in id order. Never yields the unspecified kind.
    pub fn all_kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        Kind::table()
    }

    /// Look up a kind by exact canonical snake_case name.
    pub fn kind(&self, name: &str) -> Option<Kind> {
        self.by_name.get(name).copied()
    }

    /// Look up a kind by its exact canonical or PascalCase spelling.
    pub fn lookup_exact(&self, raw: &str) -> Option<Kind> {
        self.kind(raw).or_else(|| self.by_pascal.get(raw).copied())
    }

    pub fn provider_of(&self, kind: Kind) -> Provider {
        kind.provider()
    }

    /// Resolve the payload binding for a kind.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::UnspecifiedKind` for the zero kind and
    /// `CodecError::VariantNotFound` when no payload type is wired for a
    /// kind in the table.
    pub fn resolve_variant(&self, kind: Kind) -> Result<&VariantEntry, CodecError> {
        if kind.is_unspecified() {
            return Err(CodecError::UnspecifiedKind);
        }
        self.variants.get(&kind).ok_or_else(|| {
            error!(kind = kind.name(), "no payload type registered for kind");
            CodecError::VariantNotFound {
                kind: kind.name().to_string(),
            }
        })
    }

    /// Kinds with a wired payload type, in id order.
    pub fn registered_kinds(&self) -> Vec<Kind> {
        let mut kinds: Vec<Kind> = self.variants.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn is_registered(&self, kind: Kind) -> bool {
        self.variants.contains_key(&kind)
    }

    /// Listing of every kind with its provider and a short description.
    pub fn kind_infos(&self) -> Vec<KindInfo> {
        self.all_kinds()
            .map(|kind| {
                let provider = kind.provider();
                KindInfo {
                    kind: kind.name().to_string(),
                    provider,
                    description: format!("{}: {}", provider.description(), kind.name()),
                }
            })
            .collect()
    }

    /// Every kind grouped by provider, with PascalCase names sorted per
    /// provider.
    pub fn grouped(&self) -> GroupedCatalog {
        let mut providers: BTreeMap<String, ProviderKinds> = BTreeMap::new();
        for kind in self.all_kinds() {
            let provider = kind.provider();
            providers
                .entry(provider.as_str().to_string())
                .or_insert_with(|| ProviderKinds {
                    api_version: provider.api_version(),
                    kinds: Vec::new(),
                })
                .kinds
                .push(kind.pascal_name());
        }

        let mut total_kinds = 0;
        for entry in providers.values_mut() {
            entry.kinds.sort();
            total_kinds += entry.kinds.len();
        }

        GroupedCatalog {
            schema_uri_template: SCHEMA_URI_TEMPLATE.to_string(),
            total_kinds,
            providers,
        }
    }

    /// Popular kinds per category. Only kinds with a wired payload type are
    /// listed, so every suggestion can be wrapped.
    pub fn popular_kinds_by_category(&self) -> BTreeMap<&'static str, Vec<Kind>> {
        POPULAR_KINDS
            .iter()
            .map(|(category, names)| {
                let kinds = names
                    .iter()
                    .filter_map(|name| self.kind(name))
                    .filter(|kind| self.is_registered(*kind))
                    .collect();
                (*category, kinds)
            })
            .collect()
    }

    /// Schema URI for a kind, e.g. `cloud-resource-schema://AwsEksCluster`.
    pub fn schema_uri(&self, kind: Kind) -> String {
        SCHEMA_URI_TEMPLATE.replace("{kind}", &snake_to_pascal(kind.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_excludes_unspecified_and_is_sorted() {
        let catalog = Catalog::new();
        let kinds: Vec<Kind> = catalog.all_kinds().collect();
        assert!(!kinds.is_empty());
        assert!(kinds.iter().all(|k| !k.is_unspecified()));
        assert!(kinds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn lookup_by_both_spellings() {
        let catalog = Catalog::new();
        let snake = catalog.lookup_exact("gcp_gke_cluster").unwrap();
        let pascal = catalog.lookup_exact("GcpGkeCluster").unwrap();
        assert_eq!(snake, pascal);
        assert!(catalog.kind("GcpGkeCluster").is_none());
        assert!(catalog.lookup_exact("unspecified").is_none());
    }

    #[test]
    fn provider_of_delegates_to_id_ranges() {
        let catalog = Catalog::new();
        let kind = catalog.kind("civo_volume").unwrap();
        assert_eq!(catalog.provider_of(kind), Provider::Civo);
        let kind = catalog.kind("cloudflare_dns_zone").unwrap();
        assert_eq!(catalog.provider_of(kind), Provider::Cloudflare);
    }

    #[test]
    fn resolve_variant_for_registered_kind() {
        let catalog = Catalog::new();
        let kind = catalog.kind("aws_vpc").unwrap();
        let entry = catalog.resolve_variant(kind).unwrap();
        assert_eq!(entry.kind(), kind);
        assert_eq!(entry.descriptor().name, "AwsVpc");
    }

    #[test]
    fn resolve_variant_rejects_unspecified() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.resolve_variant(Kind::UNSPECIFIED),
            Err(CodecError::UnspecifiedKind)
        ));
    }

    #[test]
    fn resolve_variant_for_unwired_kind_is_internal() {
        let catalog = Catalog::new();
        let kind = catalog.kind("aws_lambda").unwrap();
        assert!(!catalog.is_registered(kind));
        let err = catalog.resolve_variant(kind).unwrap_err();
        assert!(err.is_internal());
        assert_eq!(err.to_string(), "no payload type is registered for kind aws_lambda");
    }

    #[test]
    fn every_binding_is_registered() {
        let catalog = Catalog::new();
        assert_eq!(catalog.registered_kinds().len(), variant_bindings().len());
    }

    #[test]
    fn kind_info_description() {
        let catalog = Catalog::new();
        let info = catalog
            .kind_infos()
            .into_iter()
            .find(|info| info.kind == "aws_s3_bucket")
            .unwrap();
        assert_eq!(info.provider, Provider::Aws);
        assert_eq!(info.description, "Amazon Web Services resource: aws_s3_bucket");
    }

    #[test]
    fn grouped_catalog_is_sorted_and_counted() {
        let catalog = Catalog::new();
        let grouped = catalog.grouped();
        assert_eq!(grouped.schema_uri_template, "cloud-resource-schema://{kind}");
        assert_eq!(grouped.total_kinds, catalog.all_kinds().count());

        let aws = &grouped.providers["aws"];
        assert_eq!(aws.api_version, "aws.project-planton.org/v1");
        assert!(aws.kinds.contains(&"AwsEksCluster".to_string()));
        for entry in grouped.providers.values() {
            assert!(entry.kinds.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn popular_kinds_resolve() {
        let catalog = Catalog::new();
        let popular = catalog.popular_kinds_by_category();
        assert_eq!(popular.len(), 4);
        assert_eq!(popular["kubernetes"][0].name(), "kubernetes_deployment");
        let aws: Vec<&str> = popular["aws"].iter().map(Kind::name).collect();
        assert_eq!(
            aws,
            ["aws_eks_cluster", "aws_rds_instance", "aws_s3_bucket", "aws_vpc"]
        );
    }

    #[test]
    fn every_popular_kind_can_be_wrapped() {
        let catalog = Catalog::new();
        for (category, kinds) in catalog.popular_kinds_by_category() {
            assert!(!kinds.is_empty(), "{category} has no popular kinds");
            for kind in kinds {
                assert!(catalog.resolve_variant(kind).is_ok(), "{kind} is not wired");
            }
        }
    }

    #[test]
    fn schema_uri_uses_pascal_name() {
        let catalog = Catalog::new();
        let kind = catalog.kind("aws_eks_cluster").unwrap();
        assert_eq!(catalog.schema_uri(kind), "cloud-resource-schema://AwsEksCluster");
    }

    #[test]
    fn catalog_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
