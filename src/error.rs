//! Error types for lancache-rules.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for rule generation operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Manifest file absent from the repository root
    #[error("manifest not found: {0}")]
    MissingManifest(PathBuf),

    /// Manifest present but fails to parse into the required shape
    #[error("invalid manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    /// IO error (domain file reads, final output write)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rule generation operations.
pub type Result<T> = std::result::Result<T, Error>;
