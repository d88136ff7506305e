//! Domain-list file parsing.
//!
//! Each file holds one wildcard-or-bare domain pattern per line. Blank
//! lines and lines whose first raw character is `#` are skipped; a
//! leading `*.` on a pattern requests a double-anchor rule.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// The normalized result of parsing one significant domain-list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEntry {
    /// Number of leading `|` anchors in the emitted rules (1 or 2)
    pub anchors: usize,
    /// Pattern with any leading `*.` stripped
    pub domain: String,
}

/// Lazy reader for one domain-list file.
///
/// Holds only the path; [`DomainFileParser::entries`] reopens the file on
/// every call, so the sequence is restartable and large lists are never
/// held in memory.
pub struct DomainFileParser {
    path: PathBuf,
}

impl DomainFileParser {
    /// Create a parser for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying domain-list file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and iterate its significant lines in file order.
    pub fn entries(&self) -> Result<DomainEntries> {
        let file = File::open(&self.path)?;
        Ok(DomainEntries {
            lines: BufReader::new(file).lines(),
        })
    }
}

/// Iterator over the [`DomainEntry`] values of one domain-list file.
pub struct DomainEntries {
    lines: Lines<BufReader<File>>,
}

impl Iterator for DomainEntries {
    type Item = DomainEntry;

    fn next(&mut self) -> Option<DomainEntry> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(_) => return None,
            };
            if let Some(entry) = parse_line(&line) {
                return Some(entry);
            }
        }
    }
}

/// Parse one raw line into a [`DomainEntry`].
///
/// Returns `None` for blank lines and comments. The comment check looks
/// at the untrimmed first character, so a line with whitespace before
/// `#` is not a comment; trimming happens afterwards, only for the
/// wildcard check.
pub fn parse_line(line: &str) -> Option<DomainEntry> {
    if line.trim().is_empty() || line.starts_with('#') {
        return None;
    }

    let trimmed = line.trim();
    match trimmed.strip_prefix("*.") {
        Some(rest) => Some(DomainEntry {
            anchors: 2,
            domain: rest.to_string(),
        }),
        None => Some(DomainEntry {
            anchors: 1,
            domain: trimmed.to_string(),
        }),
    }
}
