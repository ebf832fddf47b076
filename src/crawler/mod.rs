//! Crawler module for search-result fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and the site availability check
//! - Search-page parsing: result counts and machine links
//! - Overall crawl orchestration and progress tracking

mod driver;
mod fetcher;
mod listing;

pub use driver::{CrawlOutcome, CrawlProgress, Driver};
pub use fetcher::{build_http_client, check_site, fetch_page};
pub use listing::{
    enumerate_page, listing_url, parse_base_url, parse_machine_links, parse_result_count,
    resolve_result_count, search_url,
};

use crate::config::Config;
use crate::output::{ProgressReporter, RecordSink};
use crate::ScrapeError;
use url::Url;

/// Runs a complete crawl for one search term
///
/// This is the main entry point for a crawl. It will:
/// 1. Build the HTTP client
/// 2. Confirm the site responds
/// 3. Resolve the total result count for the term
/// 4. Walk listing pages, extracting every machine
/// 5. Stream records to the sink while reporting progress
///
/// # Arguments
///
/// * `config` - HTTP and filtering configuration
/// * `base` - Base URL of the listing site
/// * `term` - Search term (must be non-empty)
/// * `extended` - Whether to extract description and release sections
/// * `sink` - Destination for extracted records
/// * `progress` - Receives `(completed, total)` after every machine
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Crawl finished; inspect the outcome for shortfalls
/// * `Err(ScrapeError)` - Crawl aborted
pub async fn crawl(
    config: &Config,
    base: &Url,
    term: &str,
    extended: bool,
    sink: &mut dyn RecordSink,
    progress: &mut dyn ProgressReporter,
) -> Result<CrawlOutcome, ScrapeError> {
    let client = build_http_client(&config.http)?;
    let mut driver = Driver::new(client, base.clone(), config.clone(), sink, progress);
    driver.run(term, extended).await
}
