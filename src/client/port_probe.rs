//! TCP liveness probing
//!
//! A node counts as alive iff a TCP handshake to its advertised address
//! completes within the probe timeout. One attempt per call, no retries;
//! scrape frequency is driven entirely by inbound request rate.

use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time;
use tracing::debug;

/// Test whether a TCP handshake to `host:port` completes within `timeout`.
///
/// The port is accepted as text because worker ports are lifted verbatim
/// from console HTML cells; a value that does not resolve simply reports
/// the node as unreachable. Returns false, never an error, on timeout,
/// refusal, resolution failure or any other transport error; the reason is
/// only visible as a debug diagnostic.
pub async fn probe_port(host: &str, port: &str, timeout: Duration) -> bool {
    let addr = format!("{}:{}", host, port);

    match time::timeout(timeout, TcpStream::connect(addr.as_str())).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            debug!(addr = %addr, error = %e, "probe connect failed");
            false
        }
        Err(_) => {
            debug!(addr = %addr, timeout_ms = timeout.as_millis() as u64, "probe timed out");
            false
        }
    }
}
