//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester:
//! - Building the HTTP client with user agent and timeouts
//! - GET requests returning status and body
//! - Turning non-success statuses into `HarvestError::Fetch`

use crate::config::HttpConfig;
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;

/// A fetched page, consumed immediately by link extraction
#[derive(Debug, Clone)]
pub struct PageFetchResult {
    /// URL that was requested
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Raw HTML body
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use genre_harvest::config::HttpConfig;
/// use genre_harvest::harvest::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single blocking-style GET
///
/// There is no retry: a non-2xx status becomes `HarvestError::Fetch` and a
/// transport failure (connection refused, timeout, truncated body) becomes
/// `HarvestError::Http`. Redirects are followed by the client.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<PageFetchResult, HarvestError> {
    tracing::debug!("GET {}", url);

    let response = client.get(url).send().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("{} returned HTTP {}", url, status.as_u16());
        return Err(HarvestError::Fetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::trace!("{} returned {} bytes", url, body.len());

    Ok(PageFetchResult {
        url: url.to_string(),
        status: status.as_u16(),
        body,
    })
}
