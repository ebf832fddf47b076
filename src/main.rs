//! Vulnscrape main entry point
//!
//! This is the command-line interface for the vulnscrape search crawler.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vulnscrape::config::{load_config, Config};
use vulnscrape::crawler::{crawl, parse_base_url, CrawlOutcome};
use vulnscrape::output::{ConsoleProgress, FileSink};

/// Vulnscrape: a VulnHub search crawler
///
/// Searches vulnhub.com for a term, walks every results page the search
/// matches, and appends the extracted machine records to a file.
#[derive(Parser, Debug)]
#[command(name = "vulnscrape")]
#[command(version)]
#[command(about = "Scrape VulnHub machine data for a search term", long_about = None)]
struct Cli {
    /// Term to search for
    #[arg(short, long)]
    term: String,

    /// File the extracted records are appended to
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Also extract the description and about-release sections
    #[arg(short, long)]
    extended: bool,

    /// Base URL of the listing site
    #[arg(long, default_value = "https://www.vulnhub.com", value_name = "URL")]
    base_url: String,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, falling back to built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    let base = parse_base_url(&cli.base_url)?;

    let mut sink = FileSink::open(&cli.file)?;
    let mut progress = ConsoleProgress::new();

    if !cli.quiet {
        println!("Searching: {}\n", cli.term);
    }

    match crawl(
        &config,
        &base,
        &cli.term,
        cli.extended,
        &mut sink,
        &mut progress,
    )
    .await
    {
        Ok(CrawlOutcome::Completed { total }) => {
            println!("Done! Saved {} machines to {}", total, cli.file.display());
            Ok(())
        }
        Ok(CrawlOutcome::NoResults) => {
            println!("No machines found for the given term.");
            Ok(())
        }
        Ok(CrawlOutcome::ShortCount {
            completed,
            expected,
        }) => {
            println!(
                "Listing ran dry: saved {} of {} advertised machines to {}",
                completed,
                expected,
                cli.file.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("vulnscrape=info,warn"),
            1 => EnvFilter::new("vulnscrape=debug,info"),
            2 => EnvFilter::new("vulnscrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
