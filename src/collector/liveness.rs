//! Node liveness collection
//!
//! The manager is probed directly; worker addresses are only known through
//! the manager's node listing page, so their liveness depends on that page
//! being fetchable. A failed fetch degrades to "no worker readings this
//! cycle" and never aborts the scrape.

use std::sync::Arc;
use std::time::Duration;

use scraper::Selector;
use tracing::warn;

use crate::client::{probe_port, ConsoleClient};
use crate::config::ManagerAddress;
use crate::metrics::ExporterMetrics;
use crate::parse::{extract_table_rows, status_table_selector};

/// Node listing rows carry identifier columns first; IP and port follow
const MIN_NODE_CELLS: usize = 4;
const NODE_IP_CELL: usize = 2;
const NODE_PORT_CELL: usize = 3;

/// Role of a cluster member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Manager,
    Worker,
}

impl NodeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeRole::Manager => "manager",
            NodeRole::Worker => "worker",
        }
    }
}

/// Liveness reading for one cluster member, rebuilt on every scrape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// `host:port` as advertised by the console (or configured, for the manager)
    pub address: String,
    pub role: NodeRole,
    pub up: bool,
}

/// Probes the manager and every worker it lists
pub struct NodeLivenessCollector {
    console: ConsoleClient,
    metrics: Arc<ExporterMetrics>,
    probe_timeout: Duration,
    table: Selector,
}

impl NodeLivenessCollector {
    pub fn new(
        console: ConsoleClient,
        metrics: Arc<ExporterMetrics>,
        probe_timeout: Duration,
    ) -> Self {
        Self {
            console,
            metrics,
            probe_timeout,
            table: status_table_selector(),
        }
    }

    /// Run one liveness cycle against `manager`.
    ///
    /// The manager's own liveness is always determined via direct probe,
    /// independent of the node listing fetch succeeding.
    pub async fn collect(&self, manager: &ManagerAddress) -> Vec<Node> {
        let mut nodes = Vec::new();

        let up = probe_port(&manager.host, &manager.port, self.probe_timeout).await;
        let address = manager.to_string();
        self.metrics
            .set_node_up(&address, NodeRole::Manager.as_str(), up);
        nodes.push(Node {
            address,
            role: NodeRole::Manager,
            up,
        });

        let html = match self.console.fetch_node_list(manager).await {
            Ok(html) => html,
            Err(e) => {
                warn!(manager = %manager, error = %e, "node listing fetch failed, skipping worker probes");
                return nodes;
            }
        };

        for cells in extract_table_rows(&html, &self.table, MIN_NODE_CELLS) {
            let host = &cells[NODE_IP_CELL];
            let port = &cells[NODE_PORT_CELL];
            let up = probe_port(host, port, self.probe_timeout).await;
            let address = format!("{}:{}", host, port);
            self.metrics
                .set_node_up(&address, NodeRole::Worker.as_str(), up);
            nodes.push(Node {
                address,
                role: NodeRole::Worker,
                up,
            });
        }

        nodes
    }
}
