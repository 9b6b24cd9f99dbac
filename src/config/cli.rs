//! Command-line argument parsing

use clap::Parser;

/// Prometheus exporter for the otter data-synchronization console
#[derive(Parser, Debug, Clone)]
#[command(name = "otter-exporter")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    // ===== Exporter surface =====
    /// Address and port for the exporter's own HTTP endpoint
    #[arg(long = "listen-address", default_value = "127.0.0.1:9310")]
    pub listen_address: String,

    // ===== Upstream console =====
    /// Address and port of the otter manager console
    #[arg(long = "otter-address", default_value = "127.0.0.1:3100")]
    pub otter_address: String,

    /// TCP liveness probe timeout in milliseconds
    #[arg(long = "probe-timeout", default_value_t = 3000)]
    pub probe_timeout_ms: u64,

    /// Console page fetch timeout in milliseconds
    #[arg(long = "fetch-timeout", default_value_t = 10000)]
    pub fetch_timeout_ms: u64,

    // ===== Output =====
    /// Quiet mode (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output (per-probe diagnostics)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse CLI arguments from the command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.probe_timeout_ms == 0 {
            return Err("--probe-timeout must be at least 1".to_string());
        }
        if self.fetch_timeout_ms == 0 {
            return Err("--fetch-timeout must be at least 1".to_string());
        }
        Ok(())
    }
}
