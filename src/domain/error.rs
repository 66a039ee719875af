//! Domain-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent catalog and loader failures.
///
/// Tree-level "not found" and "duplicate rejected" are sentinel results
/// (`Option`/`bool`) on the tree itself, not errors; the variants here
/// belong to the I/O-facing loader and the CLI conversions.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("invalid catalog source {path}: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("path resolution failed: {path}, reason: {reason}")]
    PathResolution { path: PathBuf, reason: String },

    #[error("no movie titled '{0}' in the library")]
    TitleNotFound(String),
}
