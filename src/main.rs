//! A3S Scout CLI - proxied GitHub search scraper.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use a3s_scout::{Scout, ScoutConfig, SearchItem, SearchRequest};

/// A3S Scout - scrape GitHub search results through a ranked proxy pool
#[derive(Parser)]
#[command(name = "a3s-scout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input document: {"keywords": [...], "type": "...", "proxies": [...]}
    #[arg(short, long, default_value = "input.json")]
    input: PathBuf,

    /// Output document receiving the result array
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search and enrichment timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Proxy liveness probe timeout in seconds
    #[arg(long)]
    probe_timeout: Option<u64>,

    /// Maximum simultaneous connections per proxy client
    #[arg(long)]
    max_connections: Option<usize>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let request = read_request(&cli.input)?;

    let scout = Scout::new(config)?;
    let items = scout.search(&request).await?;

    save_output(&cli.output, &items)?;
    info!("Finished!");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ScoutConfig> {
    let mut config = match &cli.config {
        Some(path) => ScoutConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScoutConfig::default(),
    };
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(secs);
    }
    if let Some(secs) = cli.probe_timeout {
        config = config.with_probe_timeout(secs);
    }
    if let Some(max) = cli.max_connections {
        config = config.with_max_connections(max);
    }
    Ok(config)
}

fn read_request(path: &Path) -> Result<SearchRequest> {
    info!("Reading input file {}", path.display());
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;

    info!("Validating input data");
    SearchRequest::from_json(&raw).with_context(|| format!("Invalid input file {}", path.display()))
}

fn save_output(path: &Path, items: &[SearchItem]) -> Result<()> {
    info!("Saving output file {}", path.display());
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    items.serialize(&mut serializer)?;
    buf.push(b'\n');
    fs::write(path, buf).with_context(|| format!("Failed to write output file {}", path.display()))
}
