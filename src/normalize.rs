//! Kind name normalization with fuzzy suggestions.
//!
//! Agents and users spell kinds in many ways: `aws_rds_instance`,
//! `AwsRdsInstance`, `AWS RDS Instance`, `aws-rds-instance`. [`normalize`]
//! maps all of them onto the same catalog entry and, on a miss, ranks the
//! closest catalog names so the caller can offer "did you mean".

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::NormalizeError;
use crate::kind::Kind;

/// Maximum number of suggestions attached to an unknown-kind error.
pub const MAX_SUGGESTIONS: usize = 5;

/// A ranked catalog name offered for an unresolved input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Canonical snake_case kind name.
    pub kind: String,
    pub score: u32,
}

/// Resolve any supported spelling of a kind to its catalog entry.
///
/// Lookup order: exact raw match (canonical or PascalCase spelling), then the
/// lowercased form with spaces and hyphens turned into underscores, then that
/// form converted to PascalCase, and finally the raw input converted from
/// PascalCase to snake_case.
///
/// # Errors
///
/// Returns `NormalizeError::Empty` for blank input and
/// `NormalizeError::UnknownKind` with up to [`MAX_SUGGESTIONS`] ranked
/// suggestions when nothing matches. The unspecified sentinel never
/// resolves.
pub fn normalize(catalog: &Catalog, input: &str) -> Result<Kind, NormalizeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(NormalizeError::Empty);
    }

    if let Some(kind) = catalog.lookup_exact(input) {
        return Ok(kind);
    }

    let normalized = normalize_spelling(input);
    let resolved = catalog
        .kind(&normalized)
        .or_else(|| catalog.lookup_exact(&snake_to_pascal(&normalized)))
        .or_else(|| catalog.kind(&pascal_to_snake(input)));

    if let Some(kind) = resolved {
        debug!(input, kind = kind.name(), "normalized cloud resource kind");
        return Ok(kind);
    }

    Err(NormalizeError::UnknownKind {
        input: input.to_string(),
        suggestions: find_similar_kinds(catalog, input, MAX_SUGGESTIONS),
    })
}

/// Rank catalog kinds by similarity to `input`.
///
/// Only kinds with a nonzero score are returned, best first. Equal scores
/// keep catalog iteration order; that order is not guaranteed to survive a
/// catalog rebuild, so callers should not depend on how ties fall.
pub fn find_similar_kinds(catalog: &Catalog, input: &str, limit: usize) -> Vec<Suggestion> {
    if input.is_empty() || limit == 0 {
        return Vec::new();
    }

    let normalized = normalize_spelling(input);
    let mut matches: Vec<Suggestion> = catalog
        .all_kinds()
        .filter_map(|kind| {
            let score = similarity(&normalized, kind.name());
            (score > 0).then(|| Suggestion {
                kind: kind.name().to_string(),
                score,
            })
        })
        .collect();

    // Stable: ties stay in catalog order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
    matches
}

/// Score how close `input` is to `candidate`. Higher is closer.
///
/// Both arguments are expected in normalized snake_case.
pub fn similarity(input: &str, candidate: &str) -> u32 {
    if input == candidate {
        return 1000;
    }

    let mut score = 0;

    if candidate.contains(input) {
        score += 500;
    }
    if input.contains(candidate) {
        score += 400;
    }

    if candidate.starts_with(input) {
        score += 300;
    }
    if input.starts_with(candidate) {
        score += 250;
    }

    for input_word in input.split('_') {
        for candidate_word in candidate.split('_') {
            if input_word == candidate_word {
                score += 100;
            } else if candidate_word.contains(input_word) {
                score += 50;
            } else if input_word.contains(candidate_word) {
                score += 25;
            }
        }
    }

    score
}

/// Lowercase and turn spaces and hyphens into underscores.
pub fn normalize_spelling(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// `aws_rds_instance` → `AwsRdsInstance`.
pub fn snake_to_pascal(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// `AwsRdsInstance` → `aws_rds_instance`.
///
/// An underscore goes before every uppercase letter except the first
/// character, then everything is lowercased.
pub fn pascal_to_snake(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new()
    }

    #[test]
    fn exact_canonical_name() {
        let kind = normalize(&catalog(), "aws_rds_instance").unwrap();
        assert_eq!(kind.name(), "aws_rds_instance");
    }

    #[test]
    fn accepted_spellings_agree() {
        let catalog = catalog();
        let expected = normalize(&catalog, "aws_rds_instance").unwrap();
        for spelling in [
            "AwsRdsInstance",
            "AWS RDS Instance",
            "aws-rds-instance",
            "Aws-Rds-Instance",
            "  aws_rds_instance  ",
            "awsRdsInstance",
        ] {
            assert_eq!(
                normalize(&catalog, spelling).unwrap(),
                expected,
                "spelling {spelling:?}"
            );
        }
    }

    #[test]
    fn natural_language_kubernetes_deployment() {
        let kind = normalize(&catalog(), "Kubernetes Deployment").unwrap();
        assert_eq!(kind.name(), "kubernetes_deployment");
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(normalize(&catalog(), ""), Err(NormalizeError::Empty)));
        assert!(matches!(normalize(&catalog(), "   "), Err(NormalizeError::Empty)));
    }

    #[test]
    fn unspecified_never_resolves() {
        assert!(matches!(
            normalize(&catalog(), "unspecified"),
            Err(NormalizeError::UnknownKind { .. })
        ));
    }

    #[test]
    fn unknown_kind_carries_ranked_suggestions() {
        let err = normalize(&catalog(), "aws_rds").unwrap_err();
        let NormalizeError::UnknownKind { input, suggestions } = err else {
            panic!("expected UnknownKind");
        };
        assert_eq!(input, "aws_rds");
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        assert!(suggestions.iter().all(|s| s.score > 0));
        assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(suggestions[0].kind.starts_with("aws_rds_"));
    }

    #[test]
    fn error_message_lists_suggestions() {
        let err = normalize(&catalog(), "kubernetes_postgre").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("unknown cloud resource kind: kubernetes_postgre"));
        assert!(message.contains("Did you mean: kubernetes_postgres"));
    }

    #[test]
    fn similarity_exact_match() {
        assert_eq!(similarity("aws_vpc", "aws_vpc"), 1000);
    }

    #[test]
    fn similarity_containment_and_prefix() {
        // candidate contains input (+500), candidate has prefix input (+300),
        // words aws (+100) rds (+100).
        assert_eq!(similarity("aws_rds", "aws_rds_instance"), 1000);
        // input contains candidate (+400), input has prefix candidate (+250),
        // words aws (+100) vpc (+100).
        assert_eq!(similarity("aws_vpc_x", "aws_vpc"), 850);
    }

    #[test]
    fn similarity_word_partials_are_asymmetric() {
        // "post" inside "postgres": candidate word contains input word.
        assert_eq!(similarity("post", "x_postgres"), 500 + 50);
        // "postgresql" contains "postgres": input word contains candidate word.
        assert_eq!(similarity("postgresql", "x_postgres"), 25);
    }

    #[test]
    fn similarity_of_unrelated_names_is_zero() {
        assert_eq!(similarity("zzz", "aws_vpc"), 0);
    }

    #[test]
    fn find_similar_respects_limit() {
        let catalog = catalog();
        assert!(find_similar_kinds(&catalog, "aws", 3).len() <= 3);
        assert!(find_similar_kinds(&catalog, "aws", 0).is_empty());
        assert!(find_similar_kinds(&catalog, "", 5).is_empty());
    }

    #[test]
    fn case_conversions() {
        assert_eq!(snake_to_pascal("aws_rds_instance"), "AwsRdsInstance");
        assert_eq!(snake_to_pascal("gcp_gke_cluster"), "GcpGkeCluster");
        assert_eq!(snake_to_pascal("aws_route53_zone"), "AwsRoute53Zone");
        assert_eq!(pascal_to_snake("AwsRdsInstance"), "aws_rds_instance");
        assert_eq!(pascal_to_snake("CloudflareD1Database"), "cloudflare_d1_database");
        assert_eq!(normalize_spelling("AWS RDS-Instance"), "aws_rds_instance");
    }
}
