//! Blue-Zone Extraction CLI
//!
//! Fetches match telemetry documents and prints the extracted blue-zone
//! parameters as JSON, one line per replay, in completion order.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bz_core::{extract_many, HttpTelemetrySource, DEFAULT_WORKERS};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bz_cli")]
#[command(about = "Extract blue-zone parameters from match telemetry", long_about = None)]
struct Cli {
    /// Telemetry URLs to process
    urls: Vec<String>,

    /// File with one telemetry URL per line ('#' starts a comment)
    #[arg(long)]
    urls_file: Option<PathBuf>,

    /// Worker pool size
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let urls = collect_urls(&cli)?;
    if urls.is_empty() {
        bail!("no telemetry URLs given (pass URLs or --urls-file)");
    }

    let total = urls.len();
    let mut failed = 0usize;

    let source = HttpTelemetrySource::new();
    for extraction in extract_many(source, urls, cli.workers)? {
        match extraction.result {
            Ok(params) => println!("{}", serde_json::to_string(&params)?),
            Err(err) => {
                eprintln!("error: {}: {}", extraction.url, err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {total} extractions failed");
    }

    Ok(())
}

fn collect_urls(cli: &Cli) -> Result<Vec<String>> {
    let mut urls = cli.urls.clone();

    if let Some(path) = &cli.urls_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        urls.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from),
        );
    }

    Ok(urls)
}
