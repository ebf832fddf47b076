//! Listing-page parsing
//!
//! This module builds search and listing URLs for a term and extracts the
//! two things a listing page carries:
//! - the total result count, from the "Search Result" heading
//! - the machine detail links, one per result card, in page order

use crate::crawler::fetcher::fetch_page;
use crate::ScrapeError;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Heading prefix that marks the total-result count on a search page
const RESULT_HEADING_PREFIX: &str = "Search Result";

/// Parses and validates a base listing URL supplied by the user
///
/// Only absolute http(s) URLs with a host are accepted.
pub fn parse_base_url(input: &str) -> Result<Url, ScrapeError> {
    let url = Url::parse(input)
        .map_err(|e| ScrapeError::InvalidBaseUrl(format!("{}: {}", input, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ScrapeError::InvalidBaseUrl(format!(
            "unsupported scheme '{}' in {}",
            url.scheme(),
            input
        )));
    }

    if url.host_str().is_none() {
        return Err(ScrapeError::InvalidBaseUrl(format!(
            "missing host in {}",
            input
        )));
    }

    Ok(url)
}

/// Builds the first-page search URL for a term (`?q=<encoded term>`)
///
/// The term is percent-encoded by the query serializer, so it may contain
/// spaces or any other reserved characters.
pub fn search_url(base: &Url, term: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().clear().append_pair("q", term);
    url
}

/// Builds the listing URL for a term and page index (`?page=<n>&q=<encoded term>`)
pub fn listing_url(base: &Url, term: &str, page: u64) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("page", &page.to_string())
        .append_pair("q", term);
    url
}

/// Resolves the total number of machines matching a term
///
/// Fetches the first results page and scans its headings for the result
/// count. A heading reporting 0 is a valid outcome; a page without the
/// heading violates the layout contract and is an error.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base` - Base URL of the listing site
/// * `term` - The search term
///
/// # Returns
///
/// * `Ok(u64)` - The advertised result count (possibly 0)
/// * `Err(ScrapeError)` - Fetch failure or missing result heading
pub async fn resolve_result_count(
    client: &Client,
    base: &Url,
    term: &str,
) -> Result<u64, ScrapeError> {
    let url = search_url(base, term);
    let body = fetch_page(client, &url).await?;

    parse_result_count(&body).ok_or_else(|| ScrapeError::LayoutMismatch {
        url: url.to_string(),
        expected: format!("a heading starting with \"{}\"", RESULT_HEADING_PREFIX),
    })
}

/// Parses the result count out of a search page body
///
/// Scans every `h2` heading and returns the first integer found in the
/// first heading that starts with the result marker. Returns `None` when
/// no heading carries the marker (or the marker heading has no number).
pub fn parse_result_count(html: &str) -> Option<u64> {
    let document = Html::parse_document(html);
    let heading_selector = Selector::parse("h2").ok()?;

    for heading in document.select(&heading_selector) {
        let text = heading.text().collect::<String>();
        let text = text.trim();
        if text.starts_with(RESULT_HEADING_PREFIX) {
            return first_integer(text);
        }
    }

    None
}

/// Enumerates the machine detail links on one listing page
///
/// An empty result is valid: it means the page index is past the last
/// populated page, and the driver treats it as end-of-site.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base` - Base URL of the listing site
/// * `term` - The search term
/// * `page` - Page index, starting at 1
///
/// # Returns
///
/// * `Ok(Vec<Url>)` - Absolute detail-page URLs in page order
/// * `Err(ScrapeError)` - Fetch failure
pub async fn enumerate_page(
    client: &Client,
    base: &Url,
    term: &str,
    page: u64,
) -> Result<Vec<Url>, ScrapeError> {
    let url = listing_url(base, term, page);
    let body = fetch_page(client, &url).await?;
    Ok(parse_machine_links(&body, base))
}

/// Extracts machine detail links from a listing page body, in DOM order
///
/// Each result card (`div.card-title`) contributes the first link it
/// contains, resolved against the base URL. Links that resolve off the
/// base host are dropped.
pub fn parse_machine_links(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    let card_selector = match Selector::parse("div.card-title") {
        Ok(s) => s,
        Err(_) => return links,
    };
    let anchor_selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return links,
    };

    for card in document.select(&card_selector) {
        if let Some(anchor) = card.select(&anchor_selector).next() {
            if let Some(href) = anchor.value().attr("href") {
                if let Ok(absolute) = base.join(href) {
                    if absolute.host_str() == base.host_str() {
                        links.push(absolute);
                    }
                }
            }
        }
    }

    links
}

/// Returns the first run of ASCII digits in the text, parsed as an integer
fn first_integer(text: &str) -> Option<u64> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
