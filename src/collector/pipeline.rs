//! Pipeline statistics collection
//!
//! Reads the console's analysis overview: one row per (channel, pipeline)
//! pair with a human-readable delay and last-collection interval. Both
//! cells are normalized to seconds before export.

use std::sync::Arc;

use scraper::Selector;
use tracing::warn;

use crate::client::ConsoleClient;
use crate::config::ManagerAddress;
use crate::metrics::ExporterMetrics;
use crate::parse::{extract_table_rows, parse_duration_seconds, status_table_selector};

/// Analysis rows: identifier, channel, pipeline, delay, last collection
const MIN_PIPELINE_CELLS: usize = 5;
const CHANNEL_CELL: usize = 1;
const PIPELINE_CELL: usize = 2;
const DELAY_CELL: usize = 3;
const LAST_COLLECTION_CELL: usize = 4;

/// Per-pipeline reading, rebuilt on every scrape
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineStat {
    pub channel: String,
    pub pipeline: String,
    pub delay_seconds: f64,
    pub last_collection_seconds: f64,
}

/// Extracts delay and last-collection figures per pipeline
pub struct PipelineStatsCollector {
    console: ConsoleClient,
    metrics: Arc<ExporterMetrics>,
    table: Selector,
}

impl PipelineStatsCollector {
    pub fn new(console: ConsoleClient, metrics: Arc<ExporterMetrics>) -> Self {
        Self {
            console,
            metrics,
            table: status_table_selector(),
        }
    }

    /// Run one statistics cycle against `manager`.
    ///
    /// A failed fetch leaves every previously exported pipeline series in
    /// place untouched; no synthetic zero readings are produced.
    pub async fn collect(&self, manager: &ManagerAddress) -> Vec<PipelineStat> {
        let html = match self.console.fetch_pipeline_stats(manager).await {
            Ok(html) => html,
            Err(e) => {
                warn!(manager = %manager, error = %e, "analysis page fetch failed, keeping previous pipeline readings");
                return Vec::new();
            }
        };

        let mut stats = Vec::new();
        for cells in extract_table_rows(&html, &self.table, MIN_PIPELINE_CELLS) {
            let stat = PipelineStat {
                channel: cells[CHANNEL_CELL].clone(),
                pipeline: cells[PIPELINE_CELL].clone(),
                delay_seconds: parse_duration_seconds(&cells[DELAY_CELL]),
                last_collection_seconds: parse_duration_seconds(&cells[LAST_COLLECTION_CELL]),
            };
            self.metrics.set_pipeline_times(
                &stat.channel,
                &stat.pipeline,
                stat.delay_seconds,
                stat.last_collection_seconds,
            );
            stats.push(stat);
        }

        stats
    }
}
