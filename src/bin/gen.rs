//! lancache-gen: CLI tool for generating AdGuard Home DNS rewrite rules
//! from a cache-domains repository checkout.

use chrono::{DateTime, FixedOffset};
use clap::Parser;
use lancache_rules::Generator;
use std::net::Ipv4Addr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lancache-gen")]
#[command(version = "0.1.0")]
#[command(
    about = "Generate AdGuard Home DNS rewrite rules for a LanCache server",
    long_about = None
)]
struct Cli {
    /// Path to the uklans/cache-domains repository checkout
    repository_path: PathBuf,

    /// LanCache server IPv4 address used as the dnsrewrite target
    lancache_ipv4: Ipv4Addr,

    /// Catalog last-modified instant, RFC 3339 with offset
    /// (e.g. 2024-05-01T10:30:00+02:00)
    last_modified: DateTime<FixedOffset>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let generator = Generator::new(cli.repository_path, cli.lancache_ipv4, cli.last_modified);
    if let Err(e) = generator.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("LanCache DNS rewrite rules successfully generated.");
}
