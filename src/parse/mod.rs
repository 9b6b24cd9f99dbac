//! Parsing of console-rendered text
//!
//! This module provides:
//! - Duration string normalization ("1h30m" -> seconds)
//! - HTML status table extraction

pub mod duration;
pub mod table;

pub use duration::parse_duration_seconds;
pub use table::{extract_table_rows, status_table_selector};
