//! Document loading from files, strings and stdin.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;

/// Source name that selects standard input.
pub const STDIN_SOURCE: &str = "-";

/// Load a JSON document from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// or `LoadError::InvalidJson` if the file isn't valid JSON.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&content, &path.display().to_string())
}

/// Load a JSON document from a JSON string.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the string isn't valid JSON.
pub fn load_document_str(content: &str) -> Result<Value, LoadError> {
    parse_document(content, "<string>")
}

/// Load a JSON document from a file path, or from stdin when the source is
/// [`STDIN_SOURCE`].
///
/// # Errors
///
/// Same as [`load_document`]; read failures on stdin are `ReadError`.
pub fn load_document_auto(source: &str) -> Result<Value, LoadError> {
    if source != STDIN_SOURCE {
        return load_document(Path::new(source));
    }

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|source| LoadError::ReadError {
            path: STDIN_SOURCE.into(),
            source,
        })?;
    parse_document(&content, "<stdin>")
}

fn parse_document(content: &str, origin: &str) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::InvalidJson {
        origin: origin.to_string(),
        source,
    })
}
