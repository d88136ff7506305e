//! Generation pipeline: manifest → domain files → `lancache.txt`.

use chrono::{DateTime, FixedOffset, Local};
use log::{debug, error};
use std::fs;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use crate::domains::DomainFileParser;
use crate::emit;
use crate::error::Result;
use crate::manifest::{CacheDomainCatalog, CacheDomainGroup, MANIFEST_FILE_NAME};

/// Output filename, written into the current working directory.
pub const OUTPUT_FILE_NAME: &str = "lancache.txt";

/// Pre-sized buffer capacity; a full cache-domains catalog generates
/// well under this.
const EXPECTED_OUTPUT_CAPACITY: usize = 150_000;

/// One-shot generator for the AdGuard Home rule file.
///
/// Takes pre-validated inputs (the CLI boundary rejects malformed IPv4
/// literals and timestamps before constructing one) and produces the
/// whole output in a single run.
pub struct Generator {
    repository_root: PathBuf,
    lancache_ipv4: Ipv4Addr,
    last_modified: DateTime<FixedOffset>,
}

impl Generator {
    /// Create a generator for a cache-domains repository checkout.
    pub fn new(
        repository_root: impl Into<PathBuf>,
        lancache_ipv4: Ipv4Addr,
        last_modified: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            repository_root: repository_root.into(),
            lancache_ipv4,
            last_modified,
        }
    }

    /// Run the pipeline and write [`OUTPUT_FILE_NAME`] into the current
    /// working directory.
    pub fn run(&self) -> Result<PathBuf> {
        self.write_output(Path::new("."))
    }

    /// Run the pipeline and write [`OUTPUT_FILE_NAME`] into `dir`,
    /// overwriting any existing file.
    ///
    /// Fatal conditions (missing or invalid manifest, output write
    /// failure) abort with nothing written; a missing domain file is
    /// only logged and skipped.
    pub fn write_output(&self, dir: &Path) -> Result<PathBuf> {
        let output = self.generate()?;
        let output_path = dir.join(OUTPUT_FILE_NAME);
        fs::write(&output_path, output)?;
        Ok(output_path)
    }

    /// Build the full output text without touching the output file.
    pub fn generate(&self) -> Result<String> {
        let manifest_path = self.repository_root.join(MANIFEST_FILE_NAME);
        let catalog = CacheDomainCatalog::load(&manifest_path)?;

        let mut buf = String::with_capacity(EXPECTED_OUTPUT_CAPACITY);
        let generated_at = Local::now().fixed_offset();
        emit::write_banner(&mut buf, &self.last_modified, &generated_at);

        for group in &catalog.cache_domains {
            self.generate_group(&mut buf, group);
        }

        Ok(buf)
    }

    /// Append one group's section header and rule pairs.
    fn generate_group(&self, buf: &mut String, group: &CacheDomainGroup) {
        emit::write_section_header(buf, group);

        for domain_file in &group.domain_files {
            let path = self.repository_root.join(domain_file);
            if !path.exists() {
                error!("{} doesn't exist, skipping", path.display());
                continue;
            }

            let parser = DomainFileParser::new(&path);
            match parser.entries() {
                Ok(entries) => {
                    let mut count = 0usize;
                    for entry in entries {
                        emit::write_rules(buf, &entry, self.lancache_ipv4);
                        count += 1;
                    }
                    debug!("{}: {} domains", path.display(), count);
                }
                Err(e) => {
                    error!("failed to read {}: {}", path.display(), e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn last_modified() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-05-01T10:30:00+02:00").unwrap()
    }

    fn generator(repo: &TempDir) -> Generator {
        Generator::new(repo.path(), "192.168.0.4".parse().unwrap(), last_modified())
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let repo = tempfile::tempdir().unwrap();
        let err = generator(&repo).generate().unwrap_err();
        assert!(matches!(err, Error::MissingManifest(_)));
    }

    #[test]
    fn test_invalid_manifest_writes_nothing() {
        let repo = tempfile::tempdir().unwrap();
        fs::write(repo.path().join(MANIFEST_FILE_NAME), "{ broken").unwrap();

        let out = tempfile::tempdir().unwrap();
        let err = generator(&repo).write_output(out.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidManifest { .. }));
        assert!(!out.path().join(OUTPUT_FILE_NAME).exists());
    }

    #[test]
    fn test_missing_domain_file_is_skipped() {
        let repo = tempfile::tempdir().unwrap();
        fs::write(
            repo.path().join(MANIFEST_FILE_NAME),
            r#"{"cache_domains": [
                {"name": "Steam", "domain_files": ["missing.txt", "steam.txt"]}
            ]}"#,
        )
        .unwrap();
        fs::write(repo.path().join("steam.txt"), "store.steampowered.com\n").unwrap();

        let output = generator(&repo).generate().unwrap();
        assert!(output.contains("|store.steampowered.com^$dnsrewrite=192.168.0.4\n"));
    }

    #[test]
    fn test_empty_domain_file_keeps_section_header() {
        let repo = tempfile::tempdir().unwrap();
        fs::write(
            repo.path().join(MANIFEST_FILE_NAME),
            r#"{"cache_domains": [
                {"name": "Epic", "description": "Epic CDN", "domain_files": ["epic.txt"]},
                {"name": "Steam", "domain_files": ["steam.txt"]}
            ]}"#,
        )
        .unwrap();
        fs::write(repo.path().join("epic.txt"), "# nothing yet\n\n").unwrap();
        fs::write(repo.path().join("steam.txt"), "store.steampowered.com\n").unwrap();

        let output = generator(&repo).generate().unwrap();
        let epic_pos = output.find("! === Epic ===").unwrap();
        let steam_pos = output.find("! === Steam ===").unwrap();
        assert!(epic_pos < steam_pos);
        // No rules between the two section headers.
        assert!(!output[epic_pos..steam_pos].contains("$dnsrewrite"));
    }

    #[test]
    fn test_write_output_creates_file() {
        let repo = tempfile::tempdir().unwrap();
        fs::write(
            repo.path().join(MANIFEST_FILE_NAME),
            r#"{"cache_domains": [
                {"name": "Blizzard", "description": "Blizzard CDN", "domain_files": ["blizzard.txt"]}
            ]}"#,
        )
        .unwrap();
        fs::write(repo.path().join("blizzard.txt"), "*.cdn.blizzard.com\n").unwrap();

        let out = tempfile::tempdir().unwrap();
        let output_path = generator(&repo).write_output(out.path()).unwrap();
        assert_eq!(output_path, out.path().join(OUTPUT_FILE_NAME));

        let written = fs::read_to_string(output_path).unwrap();
        assert!(written.contains("||cdn.blizzard.com^$dnsrewrite=192.168.0.4\n"));
        assert!(written.contains("||cdn.blizzard.com^$dnstype=AAAA\n"));
    }
}
