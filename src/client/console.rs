//! HTTP access to the manager console pages
//!
//! The console serves two pages of interest: the node listing and the
//! pipeline analysis overview. Each is fetched with a single GET per scrape
//! cycle, bounded by the configured fetch timeout.

use std::time::Duration;

use crate::config::ManagerAddress;

/// Relative path of the node listing page
pub const NODE_LIST_PAGE: &str = "node_list.htm";

/// Relative path of the pipeline analysis page
pub const PIPELINE_STAT_PAGE: &str = "analysis_top_stat.htm";

/// Shared HTTP client for console page fetches
#[derive(Clone)]
pub struct ConsoleClient {
    http: reqwest::Client,
}

impl ConsoleClient {
    /// Create a client whose requests are bounded by `timeout`
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Fetch the node listing page
    pub async fn fetch_node_list(&self, manager: &ManagerAddress) -> Result<String, reqwest::Error> {
        self.fetch_page(manager, NODE_LIST_PAGE).await
    }

    /// Fetch the pipeline analysis page
    pub async fn fetch_pipeline_stats(
        &self,
        manager: &ManagerAddress,
    ) -> Result<String, reqwest::Error> {
        self.fetch_page(manager, PIPELINE_STAT_PAGE).await
    }

    async fn fetch_page(
        &self,
        manager: &ManagerAddress,
        page: &str,
    ) -> Result<String, reqwest::Error> {
        let url = manager.page_url(page);
        self.http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
