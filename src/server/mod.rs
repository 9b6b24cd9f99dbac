//! Exporter HTTP server

pub mod http;

pub use http::{build_router, serve, EXPOSITION_CONTENT_TYPE};
