//! Vulnscrape: a VulnHub search crawler
//!
//! This crate resolves a search term against vulnhub.com, walks the paginated
//! search results, and extracts a normalized record for every matching machine,
//! streaming the records to an append-only file while reporting progress.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;

use thiserror::Error;

/// Main error type for vulnscrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Site unavailable: {reason}")]
    SiteUnavailable { reason: String, status: Option<u16> },

    #[error("Search term must not be empty")]
    EmptySearchTerm,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Page layout mismatch at {url}: expected {expected}")]
    LayoutMismatch { url: String, expected: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for vulnscrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, parse_base_url, CrawlOutcome, CrawlProgress, Driver};
pub use extract::MachineRecord;
pub use output::{format_record, FileSink, ProgressReporter, RecordSink};
