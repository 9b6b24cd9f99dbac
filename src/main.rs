//! otter-exporter - Prometheus exporter for the otter data-sync console
//!
//! On every scrape request the exporter probes the configured manager and
//! the workers it lists, extracts pipeline statistics from the console
//! pages, and serves the resulting metric set. There is no background
//! polling; scrape frequency is the caller's choice.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use otter_exporter::collector::Scraper;
use otter_exporter::config::{CliArgs, ExporterConfig};
use otter_exporter::server;

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn run() -> Result<()> {
    let args = CliArgs::parse_args();

    setup_logging(args.verbose, args.quiet);

    let config = ExporterConfig::from_cli(&args)
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    let scraper = Arc::new(Scraper::new(&config)?);

    info!("otter-exporter v{}", env!("CARGO_PKG_VERSION"));
    info!("upstream manager console at http://{}", config.manager);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config.listen, scraper))?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
