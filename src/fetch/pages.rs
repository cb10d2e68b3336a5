use log::{debug, info};
use reqwest::Client;

use crate::config::ScrapeConfig;
use crate::error::{AppError, Context};

use super::request::{build_headers, prepare_url};
use super::FetchResult;

/// Issues one GET per symbol against the configured quote URL template.
pub struct PageFetcher {
    client: Client,
    url_template: String,
}

impl PageFetcher {
    pub fn new(config: &ScrapeConfig) -> FetchResult<Self> {
        let headers = build_headers(&config.headers)?;
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url_template: config.url_template.clone(),
        })
    }

    pub fn url_for(&self, symbol: &str) -> FetchResult<String> {
        prepare_url(&self.url_template, symbol)
    }

    /// Fetch the quote page for `symbol`. Transport failures and non-2xx statuses are errors.
    pub async fn fetch(&self, symbol: &str) -> FetchResult<String> {
        let url = self.url_for(symbol)?;
        self.fetch_url(symbol, &url).await
    }

    /// Fetch an already rendered quote URL; `symbol` only labels errors.
    pub async fn fetch_url(&self, symbol: &str, url: &str) -> FetchResult<String> {
        info!("Visiting: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request for {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::message(format!(
                "Request for stock {} failed with status {}",
                symbol, status
            )));
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read page body for {}", symbol))?;
        debug!("Fetched {} bytes for {}", body.len(), symbol);

        Ok(body)
    }
}
