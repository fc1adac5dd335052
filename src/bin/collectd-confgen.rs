// Thin wrapper around the configuration generator: load or assemble a
// metric request, generate the collectd config, write it out.

use anyhow::{Context, Result};
use clap::Parser;
use collectd_confgen::config::{LogLevel, Metrics, load_metrics};
use collectd_confgen::generator::generate_collectd_config;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Command line arguments for the generator
#[derive(Parser, Debug)]
#[command(name = "collectd-confgen", about = "Generate collectd configuration for a metric request")]
struct Args {
    /// Path to a request file (TOML, JSON or YAML) with `interval` and `scrape`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scrape interval in seconds; overrides the request file
    #[arg(short, long)]
    interval: Option<u32>,

    /// Comma-separated metric categories; overrides the request file
    #[arg(short, long, value_delimiter = ',')]
    scrape: Vec<String>,

    /// Write the generated configuration to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();
    collectd_confgen::init_logging(&args.log_level);

    // Start from the request file if one was given, then apply flag overrides.
    let mut metrics = match &args.config {
        Some(path) => load_metrics(path)
            .with_context(|| format!("Failed to load request from {}", path.display()))?,
        None => Metrics::default(),
    };

    if let Some(interval) = args.interval {
        metrics.interval = interval;
    }
    if !args.scrape.is_empty() {
        metrics.scrape = args.scrape.clone();
    }

    debug!("Request: {:?}", metrics);

    let config_text =
        generate_collectd_config(&metrics).context("Failed to generate collectd configuration")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &config_text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote collectd configuration to {}", path.display());
        }
        None => {
            std::io::stdout()
                .write_all(config_text.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
