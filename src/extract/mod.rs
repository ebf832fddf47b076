//! Machine detail-page extraction
//!
//! This module turns one detail page into a normalized record:
//! - title and canonical URL from the page's OpenGraph metadata
//! - optional description and about-release sections, cleaned of interface
//!   chrome and boilerplate labels

mod detail;
mod junk;

pub use detail::{extract_record, MachineRecord};
pub use junk::{clean_lines, normalize_section, section_text};
