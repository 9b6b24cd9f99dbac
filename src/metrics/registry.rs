//! Exported metric set
//!
//! All series live in an explicit registry owned by the scraper and shared
//! by reference across concurrent scrape handlers. Gauges are idempotently
//! overwritten per label set; the registry's own synchronization makes
//! concurrent label-set updates safe, so collectors never lock anything.

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};

use crate::utils::Result;

/// Registry plus the three gauge families the exporter publishes
///
/// Metric names, label names and help strings are an exposition contract
/// consumed by existing dashboards; renaming any of them is a breaking
/// change.
pub struct ExporterMetrics {
    registry: Registry,
    node_up: GaugeVec,
    pipeline_delay: GaugeVec,
    pipeline_last_collection: GaugeVec,
}

impl ExporterMetrics {
    /// Create the registry and register every gauge family
    pub fn new() -> std::result::Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let node_up = GaugeVec::new(
            Opts::new("otter_up", "Node alived status"),
            &["node", "role"],
        )?;
        let pipeline_delay = GaugeVec::new(
            Opts::new("pipeline_delay_time", "Pipeline delay time"),
            &["Channel", "Pipeline"],
        )?;
        let pipeline_last_collection = GaugeVec::new(
            Opts::new(
                "pipeline_last_coll_time",
                "The time interval between Pipeline and the last binlog collection",
            ),
            &["Channel", "Pipeline"],
        )?;

        registry.register(Box::new(node_up.clone()))?;
        registry.register(Box::new(pipeline_delay.clone()))?;
        registry.register(Box::new(pipeline_last_collection.clone()))?;

        Ok(Self {
            registry,
            node_up,
            pipeline_delay,
            pipeline_last_collection,
        })
    }

    /// Record liveness for one node
    pub fn set_node_up(&self, node: &str, role: &str, up: bool) {
        self.node_up
            .with_label_values(&[node, role])
            .set(if up { 1.0 } else { 0.0 });
    }

    /// Record both pipeline readings for one (channel, pipeline) pair
    pub fn set_pipeline_times(
        &self,
        channel: &str,
        pipeline: &str,
        delay_seconds: f64,
        last_collection_seconds: f64,
    ) {
        self.pipeline_delay
            .with_label_values(&[channel, pipeline])
            .set(delay_seconds);
        self.pipeline_last_collection
            .with_label_values(&[channel, pipeline])
            .set(last_collection_seconds);
    }

    /// Render the current metric set in Prometheus text exposition format
    pub fn encode(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
