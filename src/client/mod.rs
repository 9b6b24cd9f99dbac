//! Upstream connection layer

pub mod console;
pub mod port_probe;

pub use console::{ConsoleClient, NODE_LIST_PAGE, PIPELINE_STAT_PAGE};
pub use port_probe::probe_port;
