//! Scrape collectors for the otter console
//!
//! This module provides:
//! - Node liveness (manager probed directly, workers discovered via the
//!   node listing page)
//! - Per-pipeline delay and last-collection statistics
//! - The request-triggered scrape cycle binding both together

pub mod liveness;
pub mod pipeline;
pub mod scrape;

pub use liveness::{Node, NodeLivenessCollector, NodeRole};
pub use pipeline::{PipelineStat, PipelineStatsCollector};
pub use scrape::Scraper;
