//! Crawl driver - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates all aspects of a
//! run: the availability gate, result-count resolution, page-by-page link
//! enumeration, per-machine extraction, and incremental output. The driver
//! owns the progress counters; no other component touches them.

use crate::config::Config;
use crate::crawler::fetcher::{check_site, fetch_page};
use crate::crawler::listing::{enumerate_page, resolve_result_count};
use crate::extract::extract_record;
use crate::output::{ProgressReporter, RecordSink};
use crate::ScrapeError;
use reqwest::Client;
use url::Url;

/// Running progress counters, owned exclusively by the driver
///
/// `completed` only ever grows and never exceeds `total_expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlProgress {
    /// Total machines the search page advertised
    pub total_expected: u64,

    /// Machines extracted and written to the sink so far
    pub completed: u64,
}

impl CrawlProgress {
    fn new(total_expected: u64) -> Self {
        Self {
            total_expected,
            completed: 0,
        }
    }

    /// Records one extracted machine
    fn advance(&mut self) {
        if self.completed < self.total_expected {
            self.completed += 1;
        }
    }

    /// Returns true once every advertised machine has been extracted
    fn is_complete(&self) -> bool {
        self.completed >= self.total_expected
    }
}

/// Final result of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// Every advertised machine was extracted
    Completed { total: u64 },

    /// The term matched nothing; no listing page was enumerated
    NoResults,

    /// Listing pages ran out before the advertised total was reached
    ShortCount { completed: u64, expected: u64 },
}

/// Orchestrates the site check, count resolution, page enumeration, and
/// per-machine extraction for one search term
pub struct Driver<'a> {
    client: Client,
    base: Url,
    config: Config,
    sink: &'a mut dyn RecordSink,
    reporter: &'a mut dyn ProgressReporter,
}

impl<'a> Driver<'a> {
    /// Creates a new driver instance
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client to use for every request
    /// * `base` - Base URL of the listing site
    /// * `config` - HTTP and filtering configuration
    /// * `sink` - Destination for extracted records
    /// * `reporter` - Receives `(completed, total)` after every machine
    pub fn new(
        client: Client,
        base: Url,
        config: Config,
        sink: &'a mut dyn RecordSink,
        reporter: &'a mut dyn ProgressReporter,
    ) -> Self {
        Self {
            client,
            base,
            config,
            sink,
            reporter,
        }
    }

    /// Runs the crawl to completion
    ///
    /// # Crawl flow
    ///
    /// 1. Reject an empty term before any network call
    /// 2. Confirm the site responds (one GET against the base URL)
    /// 3. Resolve the advertised result count; 0 ends the crawl cleanly
    /// 4. Walk listing pages from page 1, extracting every machine and
    ///    streaming it to the sink
    /// 5. Stop when the count is reached, or report a short count when a
    ///    page comes back empty first
    ///
    /// Any fetch or extraction failure aborts the run with a typed error;
    /// the caller decides whether that is fatal.
    pub async fn run(&mut self, term: &str, extended: bool) -> Result<CrawlOutcome, ScrapeError> {
        if term.trim().is_empty() {
            return Err(ScrapeError::EmptySearchTerm);
        }

        let status = check_site(&self.client, &self.base).await?;
        tracing::info!("Site is up (HTTP {})", status);

        let total = resolve_result_count(&self.client, &self.base, term).await?;
        tracing::info!("Machines matching \"{}\": {}", term, total);

        if total == 0 {
            return Ok(CrawlOutcome::NoResults);
        }

        let mut progress = CrawlProgress::new(total);
        let mut page = 1;

        while !progress.is_complete() {
            let references = enumerate_page(&self.client, &self.base, term, page).await?;
            tracing::debug!("Page {} listed {} machines", page, references.len());

            if references.is_empty() {
                // The site ran out of listings before the advertised count.
                tracing::warn!(
                    "Listing exhausted after {} of {} machines",
                    progress.completed,
                    progress.total_expected
                );
                self.reporter.finish();
                return Ok(CrawlOutcome::ShortCount {
                    completed: progress.completed,
                    expected: progress.total_expected,
                });
            }

            for reference in &references {
                let body = fetch_page(&self.client, reference).await?;
                let record = extract_record(
                    &body,
                    reference.as_str(),
                    extended,
                    &self.config.filter.banned_labels,
                )?;

                self.sink.write_record(&record)?;
                progress.advance();
                self.reporter
                    .report(progress.completed, progress.total_expected);
                tracing::debug!(
                    "Extracted {} ({}/{})",
                    record.title,
                    progress.completed,
                    progress.total_expected
                );

                if progress.is_complete() {
                    break;
                }
            }

            page += 1;
        }

        self.reporter.finish();
        Ok(CrawlOutcome::Completed { total })
    }
}
