//! Cache-domains manifest model and loader.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Manifest filename expected at the repository root.
pub const MANIFEST_FILE_NAME: &str = "cache_domains.json";

/// Top-level parsed `cache_domains.json` catalog.
///
/// Groups keep their file order; that order determines the byte layout
/// of the generated output.
#[derive(Debug, Deserialize)]
pub struct CacheDomainCatalog {
    /// Cache domain groups in file order
    #[serde(default)]
    pub cache_domains: Vec<CacheDomainGroup>,
}

/// One named group of CDN domain patterns.
#[derive(Debug, Deserialize)]
pub struct CacheDomainGroup {
    /// Group name, used verbatim in the output section header
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
    /// Extra notes, emitted only when non-empty
    #[serde(default)]
    pub notes: Option<String>,
    /// Present in the upstream manifest; no generation logic consults it
    #[serde(default)]
    pub mixed_content: bool,
    /// Domain-list file paths relative to the repository root, in file order
    pub domain_files: Vec<String>,
}

impl CacheDomainCatalog {
    /// Load and deserialize the manifest at `path`.
    ///
    /// Fails closed: a missing file, malformed JSON, or a group without
    /// `name` or `domain_files` aborts the load with no partial catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingManifest(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| Error::InvalidManifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
