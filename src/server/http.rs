//! HTTP surface of the exporter
//!
//! Two routes: a fixed landing page on `/` and the scrape endpoint on
//! `/metrics`. Each `/metrics` request triggers one full collection cycle;
//! concurrent requests are allowed and race benignly on last-write-wins
//! gauge updates.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tracing::{error, info};

use crate::collector::Scraper;
use crate::utils::Result;

/// Content type mandated by the Prometheus text exposition format
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

const LANDING_PAGE: &str =
    "<h1>Otter Exporter</h1><p>Click <a href=\"/metrics\">Metrics</a> to view metrics.</p>";

pub fn build_router(scraper: Arc<Scraper>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/metrics", get(metrics))
        .with_state(scraper)
}

/// Bind `listen` and serve until the process exits
pub async fn serve(listen: SocketAddr, scraper: Arc<Scraper>) -> Result<()> {
    let app = build_router(scraper);
    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!("listening on http://{}", listen);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

async fn metrics(State(scraper): State<Arc<Scraper>>) -> Response {
    match scraper.scrape().await {
        Ok(body) => ([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            error!(error = %e, "scrape cycle failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExporterConfig, ManagerAddress};
    use std::collections::HashMap;
    use std::io::{Read, Write};
    use std::time::Duration;

    /// Serve one canned body per request path; unknown paths get a 404
    fn spawn_console_stub(pages: HashMap<&'static str, String>) -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut buf = [0u8; 2048];
                let n = stream.read(&mut buf).unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let path = request
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .trim_start_matches('/')
                    .to_string();

                let response = match pages.get(path.as_str()) {
                    Some(body) => format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    ),
                    None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_string(),
                };
                let _ = stream.write_all(response.as_bytes());
            }
        });
        addr
    }

    fn status_table(header_cells: usize, rows: &str) -> String {
        let header: String = (0..header_cells).map(|i| format!("<td>h{}</td>", i)).collect();
        format!(
            "<html><body><table class=\"list changecolor_w\"><tr>{}</tr>{}</table></body></html>",
            header, rows
        )
    }

    fn unused_port() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port().to_string()
    }

    fn scraper_for(console_addr: &str) -> Arc<Scraper> {
        let config = ExporterConfig {
            listen: "127.0.0.1:0".parse().unwrap(),
            manager: ManagerAddress::parse(console_addr).unwrap(),
            probe_timeout: Duration::from_millis(500),
            fetch_timeout: Duration::from_secs(2),
            quiet: false,
            verbose: false,
        };
        Arc::new(Scraper::new(&config).unwrap())
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_landing_page_links_to_metrics() {
        let response = index().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("/metrics"));
    }

    #[tokio::test]
    async fn test_full_scrape_cycle() {
        let worker_port = unused_port();
        let addr = spawn_console_stub(HashMap::from([
            (
                crate::client::NODE_LIST_PAGE,
                status_table(
                    4,
                    &format!(
                        "<tr><td>1</td><td>node-a</td><td>127.0.0.1</td><td>{}</td></tr>",
                        worker_port
                    ),
                ),
            ),
            (
                crate::client::PIPELINE_STAT_PAGE,
                status_table(
                    5,
                    "<tr><td>x</td><td>chanA</td><td>pipeA</td><td>1h30m</td><td>45s</td></tr>",
                ),
            ),
        ]));

        let response = metrics(State(scraper_for(&addr))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            EXPOSITION_CONTENT_TYPE
        );

        let body = body_text(response).await;
        assert!(body.contains(&format!("otter_up{{node=\"{}\",role=\"manager\"}} 1", addr)));
        assert!(body.contains(&format!(
            "otter_up{{node=\"127.0.0.1:{}\",role=\"worker\"}} 0",
            worker_port
        )));
        assert!(body.contains("pipeline_delay_time{Channel=\"chanA\",Pipeline=\"pipeA\"} 5400"));
        assert!(body.contains("pipeline_last_coll_time{Channel=\"chanA\",Pipeline=\"pipeA\"} 45"));
    }

    #[tokio::test]
    async fn test_pipeline_page_down_still_succeeds() {
        // Stub knows only the node listing; the analysis fetch 404s
        let addr = spawn_console_stub(HashMap::from([(
            crate::client::NODE_LIST_PAGE,
            status_table(4, ""),
        )]));

        let response = metrics(State(scraper_for(&addr))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(&format!("otter_up{{node=\"{}\",role=\"manager\"}} 1", addr)));
        // No fabricated pipeline readings
        assert!(!body.contains("pipeline_delay_time{"));
        assert!(!body.contains("pipeline_last_coll_time{"));
    }

    #[tokio::test]
    async fn test_consecutive_scrapes_overwrite_not_accumulate() {
        let addr = spawn_console_stub(HashMap::from([
            (crate::client::NODE_LIST_PAGE, status_table(4, "")),
            (
                crate::client::PIPELINE_STAT_PAGE,
                status_table(
                    5,
                    "<tr><td>x</td><td>chanA</td><td>pipeA</td><td>2m</td><td>5s</td></tr>",
                ),
            ),
        ]));

        let scraper = scraper_for(&addr);
        let _ = metrics(State(Arc::clone(&scraper))).await;
        let response = metrics(State(scraper)).await;

        let body = body_text(response).await;
        assert!(body.contains("pipeline_delay_time{Channel=\"chanA\",Pipeline=\"pipeA\"} 120"));
        assert_eq!(body.matches("pipeline_delay_time{").count(), 1);
    }
}
