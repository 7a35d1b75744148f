//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::document::DocumentFormat;

/// Domain errors cover document decoding and name parsing.
/// Path lookups never produce one: absence is a normal result.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("document not found: {0}")]
    DocumentNotFound(PathBuf),

    #[error("malformed {format} document: {message}")]
    MalformedDocument {
        format: DocumentFormat,
        message: String,
    },

    #[error("unknown document format: {0} (expected json or toml)")]
    UnknownFormat(String),

    #[error("unknown absence policy: {0} (expected falsy or missing)")]
    UnknownPolicy(String),
}
