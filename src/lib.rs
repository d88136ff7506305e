//! LanCache AdGuard Home rule generator.
//!
//! This crate converts the [uklans/cache-domains](https://github.com/uklans/cache-domains)
//! catalog into a flat AdGuard Home rule file. For every domain pattern it
//! emits two rules: an IPv4 `dnsrewrite` redirect pointing A queries at the
//! LanCache server, and a `dnstype=AAAA` block so clients cannot bypass the
//! cache over IPv6.
//!
//! # Pipeline
//!
//! - **Manifest**: `cache_domains.json` names the cache domain groups and
//!   the domain-list files backing each one
//! - **Domain files**: plain text, one wildcard-or-bare pattern per line;
//!   a leading `*.` becomes a double-anchor (`||`) rule
//! - **Output**: `lancache.txt`, a header banner followed by per-group
//!   sections of rule pairs, in manifest and file order
//!
//! # Quick Start
//!
//! ```ignore
//! use lancache_rules::Generator;
//! use chrono::DateTime;
//!
//! let generator = Generator::new(
//!     "cache-domains",
//!     "192.168.0.4".parse()?,
//!     DateTime::parse_from_rfc3339("2024-05-01T10:30:00+02:00")?,
//! );
//! let output_path = generator.run()?;
//! ```

mod error;

pub mod domains;
pub mod emit;
pub mod generator;
pub mod manifest;

// Re-export core types
pub use error::{Error, Result};

pub use domains::{DomainEntries, DomainEntry, DomainFileParser};
pub use generator::{Generator, OUTPUT_FILE_NAME};
pub use manifest::{CacheDomainCatalog, CacheDomainGroup, MANIFEST_FILE_NAME};
