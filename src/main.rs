// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::Parser;
use pdns2bind::{
    config::Settings,
    constants::{CONFIG_PATH_ENV, DEFAULT_LOG_FILTER, LOG_FORMAT_ENV},
    dump::DumpSource,
    errors::ZoneGenError,
    zone::{named_conf::secondary_zone_stanza, ZoneGenerator, ZoneOptions},
};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Generate a BIND9 master zone file from PowerDNS records.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Export of the PowerDNS `domains` and `records` tables (JSON or YAML)
    #[arg(short, long)]
    source: PathBuf,

    /// Settings file (YAML or JSON); defaults to $PDNS2BIND_CONFIG
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Domain name to convert
    #[arg(short, long, conflicts_with = "domain_id")]
    domain: Option<String>,

    /// Numeric domain id to convert
    #[arg(long)]
    domain_id: Option<i64>,

    /// Primary server the secondary transfers from
    #[arg(short, long)]
    master_host: Option<String>,

    /// Nameserver to add at the apex when the zone has none (repeatable)
    #[arg(long = "default-ns")]
    default_ns: Vec<String>,

    /// Do not add default NS records to zones without apex NS
    #[arg(long)]
    no_workaround_no_ns: bool,

    /// Do not drop records that share a name with a CNAME
    #[arg(long)]
    no_workaround_cname: bool,

    /// Write the zone here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a secondary zone stanza for named.conf naming the output file
    #[arg(long, requires = "output")]
    named_conf: bool,
}

/// Layer command line flags over file settings.
fn apply_overrides(mut settings: Settings, args: &Args) -> Settings {
    if let Some(domain) = &args.domain {
        settings.domain = Some(domain.clone());
        settings.domain_id = None;
    }
    if let Some(domain_id) = args.domain_id {
        settings.domain_id = Some(domain_id);
        settings.domain = None;
    }
    if let Some(master_host) = &args.master_host {
        settings.master_host = Some(master_host.clone());
    }
    if !args.default_ns.is_empty() {
        settings.default_ns.clone_from(&args.default_ns);
    }
    if args.no_workaround_no_ns {
        settings.workaround_no_ns = false;
    }
    if args.no_workaround_cname {
        settings.workaround_cname_and_other_data = false;
    }
    settings
}

fn load_settings(args: &Args) -> Result<Settings> {
    let path = args
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

    let settings = match path {
        Some(path) => {
            debug!("Loading settings from {}", path.display());
            Settings::from_file(&path)?
        }
        None => Settings::default(),
    };

    let settings = apply_overrides(settings, args);
    settings.validate()?;
    Ok(settings)
}

fn init_logging() {
    // Format: timestamp file:line LEVEL message, on stderr so stdout only
    // carries the zone.
    //
    // Respects RUST_LOG, otherwise defaults to INFO level.
    // RUST_LOG_FORMAT=json switches to JSON output.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = load_settings(args)?;
    let domain = settings.domain_ref()?;

    let source = DumpSource::from_path(&args.source)?;
    let generator = ZoneGenerator::new(&source, ZoneOptions::from(&settings));

    let zone = generator.generate(&domain).inspect_err(|e: &ZoneGenError| {
        error!(reason = e.reason(), "Zone generation failed for {}: {}", domain, e);
    })?;

    let text = zone.text();
    let Some(path) = &args.output else {
        print!("{text}");
        return Ok(());
    };

    fs::write(path, &text)
        .with_context(|| format!("Failed to write zone file: {}", path.display()))?;
    info!("Wrote zone {} to {}", zone.domain(), path.display());

    if args.named_conf {
        // validate() guarantees master_host is set
        let master_host = settings.master_host.as_deref().unwrap_or_default();
        print!(
            "{}",
            secondary_zone_stanza(zone.domain(), master_host, &path.display().to_string())
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    info!("Starting pdns2bind");
    run(&args)
}
