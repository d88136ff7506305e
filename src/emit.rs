//! Rule-text emission: header banner, group section headers, rule pairs.
//!
//! All functions are pure appends to a caller-owned output buffer.

use chrono::{DateTime, FixedOffset};
use std::net::Ipv4Addr;

use crate::domains::DomainEntry;
use crate::manifest::CacheDomainGroup;

/// Upstream catalog project, referenced verbatim in the banner.
const HOMEPAGE: &str = "https://github.com/uklans/cache-domains";

/// Append the fixed file header banner.
///
/// Both instants are rendered in RFC 3339 round-trip form, offset
/// included.
pub fn write_banner(
    buf: &mut String,
    last_modified: &DateTime<FixedOffset>,
    generated_at: &DateTime<FixedOffset>,
) {
    let last_modified = last_modified.to_rfc3339();
    let generated_at = generated_at.to_rfc3339();

    buf.push_str("! Title: LanCache DNS rewrite\n");
    buf.push_str(
        "! Description: AdGuard DNS filtering rules for redirecting download requests to LanCache caching proxy server.\n",
    );
    buf.push_str(&format!("! Version: {}\n", last_modified));
    buf.push_str(&format!("! Homepage: {}\n", HOMEPAGE));
    buf.push_str(&format!("! Last modified: {}\n", last_modified));
    buf.push_str(&format!("! Generated at: {}\n", generated_at));
    buf.push_str("!\n");
}

/// Append the section header for one cache domain group.
///
/// The description line is emitted even when empty; the notes line only
/// when notes are present and non-empty.
pub fn write_section_header(buf: &mut String, group: &CacheDomainGroup) {
    buf.push_str(&format!("! === {} ===\n", group.name));
    buf.push_str(&format!(
        "! {}\n",
        group.description.as_deref().unwrap_or("")
    ));

    if let Some(notes) = group.notes.as_deref() {
        if !notes.is_empty() {
            buf.push_str(&format!("! Notes: {}\n", notes));
        }
    }
}

/// Append the two rules for one domain entry: the IPv4 `dnsrewrite`
/// redirect and the AAAA `dnstype` block.
pub fn write_rules(buf: &mut String, entry: &DomainEntry, lancache_ipv4: Ipv4Addr) {
    let anchors = "|".repeat(entry.anchors);
    buf.push_str(&format!(
        "{}{}^$dnsrewrite={}\n",
        anchors, entry.domain, lancache_ipv4
    ));
    buf.push_str(&format!("{}{}^$dnstype=AAAA\n", anchors, entry.domain));
}
