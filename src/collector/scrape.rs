//! Request-triggered scrape cycle
//!
//! Every inbound `/metrics` request runs one full collection cycle
//! (liveness first, then pipeline statistics, sequentially) and renders
//! whatever the registry holds afterwards. No caching, no debounce, no
//! background polling.

use std::sync::Arc;

use crate::client::ConsoleClient;
use crate::config::{ExporterConfig, ManagerAddress};
use crate::metrics::ExporterMetrics;
use crate::utils::Result;

use super::liveness::NodeLivenessCollector;
use super::pipeline::PipelineStatsCollector;

/// Owns the collectors and the shared metric registry
pub struct Scraper {
    manager: ManagerAddress,
    liveness: NodeLivenessCollector,
    pipeline: PipelineStatsCollector,
    metrics: Arc<ExporterMetrics>,
}

impl Scraper {
    /// Build the full collection pipeline from resolved configuration
    pub fn new(config: &ExporterConfig) -> Result<Self> {
        let metrics = Arc::new(ExporterMetrics::new()?);
        let console = ConsoleClient::new(config.fetch_timeout)?;

        Ok(Self {
            manager: config.manager.clone(),
            liveness: NodeLivenessCollector::new(
                console.clone(),
                Arc::clone(&metrics),
                config.probe_timeout,
            ),
            pipeline: PipelineStatsCollector::new(console, Arc::clone(&metrics)),
            metrics,
        })
    }

    /// Run one collection cycle and return the encoded metric set.
    ///
    /// Upstream failures have already been absorbed inside the collectors
    /// by the time encoding runs; an error here is an unexpected fault and
    /// maps to a 500 at the HTTP surface.
    pub async fn scrape(&self) -> Result<String> {
        self.liveness.collect(&self.manager).await;
        self.pipeline.collect(&self.manager).await;
        self.metrics.encode()
    }
}
