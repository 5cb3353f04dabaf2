//! Error types for kind normalization, the envelope codec and document loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::normalize::Suggestion;

/// Errors while resolving a user-supplied kind spelling.
#[derive(Debug, Clone, Error)]
pub enum NormalizeError {
    #[error("kind name must not be empty")]
    Empty,

    #[error("{}", unknown_kind_message(input, suggestions))]
    UnknownKind {
        input: String,
        suggestions: Vec<Suggestion>,
    },
}

fn unknown_kind_message(input: &str, suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return format!("unknown cloud resource kind: {}", input);
    }
    let names: Vec<&str> = suggestions.iter().map(|s| s.kind.as_str()).collect();
    format!(
        "unknown cloud resource kind: {}. Did you mean: {}?",
        input,
        names.join(", ")
    )
}

/// Errors reading the wrapper-level metadata.
#[derive(Debug, Clone, Error)]
pub enum MetadataError {
    #[error("metadata is missing from cloud object")]
    MissingMetadata,

    #[error("metadata must be an object, got {actual}")]
    NotAnObject { actual: String },

    #[error("metadata.{field} is required")]
    MissingField { field: &'static str },

    #[error("kind is missing from cloud object")]
    MissingKind,

    #[error("kind must be a non-empty string")]
    InvalidKind,
}

/// Errors wrapping, unwrapping or describing a cloud resource.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    UnknownKind(#[from] NormalizeError),

    #[error("cloud resource kind is unspecified")]
    UnspecifiedKind,

    #[error("no payload type is registered for kind {kind}")]
    VariantNotFound { kind: String },

    #[error(
        "invalid spec data for {kind}: {}. Use the schema command to see the expected fields",
        violation_summary(violations)
    )]
    InvalidSpecData {
        kind: String,
        violations: Vec<Violation>,
    },

    #[error("invalid metadata: {0}")]
    InvalidMetadata(#[from] MetadataError),

    #[error("envelope has no cloud object")]
    NilEnvelope,

    #[error("cloud object has no populated payload")]
    EmptyVariant,

    #[error("envelope kind {expected} does not match payload kind {actual}")]
    KindMismatch { expected: String, actual: String },
}

fn violation_summary(violations: &[Violation]) -> String {
    match violations {
        [] => "no details".to_string(),
        [single] => single.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}

impl CodecError {
    /// True for failures caused by a mismatch between the kind table and the
    /// wired payload types rather than by caller input.
    pub fn is_internal(&self) -> bool {
        matches!(self, CodecError::VariantNotFound { .. })
    }

    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CodecError::InvalidSpecData { .. } | CodecError::InvalidMetadata(_) => 1,
            _ => 2,
        }
    }
}

/// Errors loading a JSON document.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON in {origin}: {source}")]
    InvalidJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            LoadError::InvalidJson { .. } => 2,
        }
    }
}

/// Single data violation with path context.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Violation {
    /// JSON Pointer (RFC 6901) to the offending value. Empty for the root.
    pub path: String,
    /// Human-readable error message.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}
