//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeouts
//! - Single-attempt GET requests with status classification
//! - The availability check that gates the whole crawl
//!
//! There is deliberately no retry logic: every fetch is one GET, and a
//! failure is reported to the caller as a typed error.

use crate::config::HttpConfig;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client from the configuration
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body with a single GET request
///
/// A non-success status maps to `ScrapeError::HttpStatus`; a transport
/// failure (DNS, connect, timeout) maps to `ScrapeError::Http`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ScrapeError)` - The fetch failed
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| ScrapeError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| ScrapeError::Http {
        url: url.to_string(),
        source: e,
    })
}

/// Confirms that the target site responds before any crawl work begins
///
/// Issues one GET against the base URL. The crawl must not start if this
/// fails; the returned status code is logged by the caller.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base` - The site's base URL
///
/// # Returns
///
/// * `Ok(u16)` - The 2xx status code the site answered with
/// * `Err(ScrapeError::SiteUnavailable)` - Non-success status or transport failure
pub async fn check_site(client: &Client, base: &Url) -> Result<u16, ScrapeError> {
    match client.get(base.clone()).send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                Ok(status.as_u16())
            } else {
                Err(ScrapeError::SiteUnavailable {
                    reason: format!("HTTP {}", status.as_u16()),
                    status: Some(status.as_u16()),
                })
            }
        }
        Err(e) => Err(ScrapeError::SiteUnavailable {
            reason: e.to_string(),
            status: None,
        }),
    }
}
