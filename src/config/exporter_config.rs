//! Exporter configuration derived from CLI arguments

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use super::cli::CliArgs;

/// Address of the upstream manager console
///
/// The port stays as text: probe targets carry port values lifted verbatim
/// from console HTML, and the probe contract accepts them the same way.
#[derive(Debug, Clone)]
pub struct ManagerAddress {
    pub host: String,
    pub port: String,
}

impl ManagerAddress {
    /// Split a `host:port` value, failing fast on anything else
    pub fn parse(raw: &str) -> Result<Self, String> {
        let (host, port) = raw
            .rsplit_once(':')
            .ok_or_else(|| format!("invalid manager address '{}': expected host:port", raw))?;
        if host.is_empty() || port.is_empty() {
            return Err(format!("invalid manager address '{}': expected host:port", raw));
        }
        Ok(Self {
            host: host.to_string(),
            port: port.to_string(),
        })
    }

    /// URL of a console page served by this manager
    pub fn page_url(&self, page: &str) -> String {
        format!("http://{}:{}/{}", self.host, self.port, page)
    }
}

impl fmt::Display for ManagerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Complete exporter configuration
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Address the exporter's own HTTP surface binds
    pub listen: SocketAddr,
    /// Upstream manager console
    pub manager: ManagerAddress,
    /// Bound on each TCP liveness probe
    pub probe_timeout: Duration,
    /// Bound on each console page fetch
    pub fetch_timeout: Duration,

    pub quiet: bool,
    pub verbose: bool,
}

impl ExporterConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        args.validate()?;

        let listen: SocketAddr = args
            .listen_address
            .parse()
            .map_err(|e| format!("invalid listen address '{}': {}", args.listen_address, e))?;

        let manager = ManagerAddress::parse(&args.otter_address)?;

        Ok(Self {
            listen,
            manager,
            probe_timeout: Duration::from_millis(args.probe_timeout_ms),
            fetch_timeout: Duration::from_millis(args.fetch_timeout_ms),
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}
