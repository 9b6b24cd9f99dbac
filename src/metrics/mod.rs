//! Metric registry and exposition encoding

pub mod registry;

pub use registry::ExporterMetrics;
