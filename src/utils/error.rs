//! Error types for otter-exporter

use std::io;
use thiserror::Error;

/// Top-level application error
///
/// Expected upstream failures (unreachable nodes, failed page fetches,
/// malformed tables) never surface here; collectors absorb them and degrade
/// the affected metric family instead. Anything carried by this type is
/// either a startup fault or an unexpected fault inside a scrape request.
#[derive(Error, Debug)]
pub enum ExporterError {
    #[error("Console fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("Exposition encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ExporterError>;
