//! Detail-page record extraction
//!
//! Title and canonical URL come from fixed OpenGraph metadata and are
//! required; the description and about-release sections are best-effort
//! and only gathered when extended output is requested.

use crate::extract::junk::normalize_section;
use crate::ScrapeError;
use scraper::{ElementRef, Html, Selector};

/// A single machine record extracted from a detail page
///
/// Immutable once built; the output sink consumes it exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineRecord {
    /// Machine title from `og:title`
    pub title: String,

    /// Canonical machine URL from `og:url`
    pub url: String,

    /// Normalized description section, when present and requested
    pub description: Option<String>,

    /// Normalized about-release section, when present and requested
    pub release_notes: Option<String>,
}

/// Extracts a machine record from a detail page body
///
/// # Arguments
///
/// * `html` - The detail page body
/// * `page_url` - The URL the page was fetched from, for error reporting
/// * `extended` - Whether to extract the description and release sections
/// * `banned_labels` - Boilerplate labels dropped during normalization
///
/// # Returns
///
/// * `Ok(MachineRecord)` - Successfully extracted record
/// * `Err(ScrapeError::LayoutMismatch)` - Required metadata is missing
pub fn extract_record(
    html: &str,
    page_url: &str,
    extended: bool,
    banned_labels: &[String],
) -> Result<MachineRecord, ScrapeError> {
    let document = Html::parse_document(html);

    let title = meta_content(&document, "og:title")
        .ok_or_else(|| layout_mismatch(page_url, "og:title metadata"))?;
    let url = meta_content(&document, "og:url")
        .ok_or_else(|| layout_mismatch(page_url, "og:url metadata"))?;

    // Extended sections are best-effort: a missing section is omitted,
    // never an error.
    let (description, release_notes) = if extended {
        (
            section_by_id(&document, "description")
                .map(|section| normalize_section(section, banned_labels)),
            section_by_id(&document, "release")
                .map(|section| normalize_section(section, banned_labels)),
        )
    } else {
        (None, None)
    };

    Ok(MachineRecord {
        title,
        url,
        description,
        release_notes,
    })
}

/// Reads the content attribute of a named OpenGraph meta tag
fn meta_content(document: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{}"]"#, property)).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
        .filter(|content| !content.is_empty())
}

/// Finds a section container by its id
fn section_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(&format!("div#{}", id)).ok()?;
    document.select(&selector).next()
}

fn layout_mismatch(url: &str, expected: &str) -> ScrapeError {
    ScrapeError::LayoutMismatch {
        url: url.to_string(),
        expected: expected.to_string(),
    }
}
