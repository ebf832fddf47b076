//! Junk removal for extracted text sections
//!
//! Detail-page sections embed download modals, "back to top" anchors, and
//! repeated section labels that contaminate flattened text. This module
//! flattens a section's text while skipping those subtrees, then filters
//! the result line by line.

use scraper::node::Element;
use scraper::{ElementRef, Node};

/// Flattens the text of a section element, skipping junk subtrees
///
/// Text nodes inside an embedded modal (`div.modal`) or a "back to top"
/// anchor (`a[href="#top"]`) are excluded. The section element itself is
/// never treated as junk, only its descendants.
pub fn section_text(section: ElementRef<'_>) -> String {
    let section_id = section.id();
    let mut text = String::new();

    for node in section.descendants() {
        if let Node::Text(fragment) = node.value() {
            let in_junk = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != section_id)
                .filter_map(ElementRef::wrap)
                .any(|element| is_junk_element(element.value()));

            if !in_junk {
                text.push_str(&fragment.text);
            }
        }
    }

    text
}

/// Normalizes flattened section text line by line
///
/// Lines are trimmed; empty lines and lines exactly matching one of the
/// banned labels are dropped; survivors are rejoined with single line
/// breaks. Builds a new sequence rather than mutating in place, so a
/// banned line is removed wherever it appears. Applying this twice to its
/// own output yields the same text.
pub fn clean_lines(text: &str, banned_labels: &[String]) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !banned_labels.iter().any(|label| label.as_str() == *line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs the full junk-removal pass over one section element
pub fn normalize_section(section: ElementRef<'_>, banned_labels: &[String]) -> String {
    clean_lines(&section_text(section), banned_labels)
}

/// Subtrees that contaminate flattened text: embedded modal dialogs and
/// "back to top" anchors
fn is_junk_element(element: &Element) -> bool {
    match element.name() {
        "div" => element.classes().any(|class| class == "modal"),
        "a" => element.attr("href") == Some("#top"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn banned() -> Vec<String> {
        vec![
            "About Release".to_string(),
            "Description".to_string(),
            "Back to the Top".to_string(),
        ]
    }

    fn select_section(html: &str) -> (Html, Selector) {
        let document = Html::parse_document(html);
        let selector = Selector::parse("#section").unwrap();
        (document, selector)
    }

    #[test]
    fn test_clean_lines_drops_empty_lines() {
        let text = "first\n\n   \nsecond\n";
        assert_eq!(clean_lines(text, &banned()), "first\nsecond");
    }

    #[test]
    fn test_clean_lines_drops_banned_label_anywhere() {
        // First, middle, and last position
        let text = "Description\nkeep one\nBack to the Top\nkeep two\nAbout Release";
        assert_eq!(clean_lines(text, &banned()), "keep one\nkeep two");
    }

    #[test]
    fn test_clean_lines_drops_adjacent_banned_lines() {
        // Adjacent banned lines exposed the original delete-while-iterating
        // bug; every occurrence must go.
        let text = "Description\nDescription\nBack to the Top\nBack to the Top\nkeep";
        assert_eq!(clean_lines(text, &banned()), "keep");
    }

    #[test]
    fn test_clean_lines_trims_before_matching() {
        let text = "   Description   \n  keep  ";
        assert_eq!(clean_lines(text, &banned()), "keep");
    }

    #[test]
    fn test_clean_lines_keeps_partial_matches() {
        let text = "Description of the machine\nkeep";
        assert_eq!(
            clean_lines(text, &banned()),
            "Description of the machine\nkeep"
        );
    }

    #[test]
    fn test_clean_lines_is_idempotent() {
        let text = "Description\n\nThis is a boot to root VM.\n  spaced line  \nBack to the Top\n";
        let once = clean_lines(text, &banned());
        let twice = clean_lines(&once, &banned());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clean_lines_empty_input() {
        assert_eq!(clean_lines("", &banned()), "");
    }

    #[test]
    fn test_section_text_skips_modal_subtree() {
        let html = r#"<html><body><div id="section">
keep this
<div class="modal fade"><p>modal junk</p></div>
and this
</div></body></html>"#;

        let (document, selector) = select_section(html);
        let section = document.select(&selector).next().unwrap();
        let text = section_text(section);
        assert!(text.contains("keep this"));
        assert!(text.contains("and this"));
        assert!(!text.contains("modal junk"));
    }

    #[test]
    fn test_section_text_skips_back_to_top_anchor() {
        let html = r##"<html><body><div id="section">
<p>real content</p>
<a href="#top">Back to the Top</a>
</div></body></html>"##;

        let (document, selector) = select_section(html);
        let section = document.select(&selector).next().unwrap();
        let text = section_text(section);
        assert!(text.contains("real content"));
        assert!(!text.contains("Back to the Top"));
    }

    #[test]
    fn test_section_text_keeps_ordinary_anchors() {
        let html = r#"<html><body><div id="section">
<a href="/download">download link</a>
</div></body></html>"#;

        let (document, selector) = select_section(html);
        let section = document.select(&selector).next().unwrap();
        assert!(section_text(section).contains("download link"));
    }

    #[test]
    fn test_normalize_section_full_pass() {
        let html = r##"<html><body><div id="section">
Description
<p>This is a boot to root VM.</p>
<div class="modal"><p>download dialog</p></div>
<a href="#top">Back to the Top</a>
</div></body></html>"##;

        let (document, selector) = select_section(html);
        let section = document.select(&selector).next().unwrap();
        let normalized = normalize_section(section, &banned());
        assert_eq!(normalized, "This is a boot to root VM.");
    }
}
